//! Resource descriptors.
//!
//! Every remote resource kind is described by one [`ResourceKind`] variant.
//! A descriptor is pure metadata: the collection path segment, whether the
//! kind lives under a namespace, the declared field list, and how write
//! payloads are encoded. The generic operations on
//! [`RestClient`](crate::clients::RestClient) take a descriptor and never
//! special-case a kind themselves.
//!
//! # Example
//!
//! ```rust
//! use nylas_api::rest::ResourceKind;
//! use nylas_api::clients::DataType;
//!
//! let kind: ResourceKind = "messages".parse().unwrap();
//! assert_eq!(kind, ResourceKind::Message);
//! assert_eq!(kind.collection_name(), "messages");
//! assert!(kind.declares("subject"));
//! assert_eq!(ResourceKind::File.body_encoding(), DataType::Multipart);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::clients::DataType;

/// Path segment under which namespaced resources live (`/n/{namespace}/...`).
pub const API_ROOT: &str = "n";

/// The closed set of resource kinds exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The account behind the current token.
    Account,
    /// An email message.
    Message,
    /// A conversation thread.
    Thread,
    /// An unsent message.
    Draft,
    /// A tag (folder or label).
    Tag,
    /// A file attachment.
    File,
    /// An address book entry.
    Contact,
    /// A calendar.
    Calendar,
    /// A calendar event.
    Event,
}

const ACCOUNT_FIELDS: &[&str] = &[
    "id",
    "object",
    "account_id",
    "namespace_id",
    "name",
    "email_address",
    "provider",
    "organization_unit",
    "sync_state",
    "linked_at",
];

const MESSAGE_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "thread_id",
    "subject",
    "from",
    "to",
    "cc",
    "bcc",
    "reply_to",
    "date",
    "unread",
    "starred",
    "snippet",
    "body",
    "files",
    "events",
    "tags",
];

const THREAD_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "subject",
    "participants",
    "first_message_timestamp",
    "last_message_timestamp",
    "snippet",
    "unread",
    "starred",
    "tags",
    "message_ids",
    "draft_ids",
    "version",
];

const DRAFT_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "thread_id",
    "subject",
    "from",
    "to",
    "cc",
    "bcc",
    "reply_to",
    "date",
    "unread",
    "starred",
    "snippet",
    "body",
    "files",
    "file_ids",
    "tags",
    "state",
    "version",
    "reply_to_message_id",
];

const TAG_FIELDS: &[&str] = &["id", "object", "namespace_id", "account_id", "name"];

const FILE_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "filename",
    "size",
    "content_type",
    "content_id",
    "message_ids",
    "is_embedded",
];

const CONTACT_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "name",
    "email",
    "phone_numbers",
];

const CALENDAR_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "name",
    "description",
    "read_only",
];

const EVENT_FIELDS: &[&str] = &[
    "id",
    "object",
    "namespace_id",
    "account_id",
    "calendar_id",
    "title",
    "description",
    "location",
    "read_only",
    "busy",
    "status",
    "participants",
    "when",
];

impl ResourceKind {
    /// Every resource kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Account,
        Self::Message,
        Self::Thread,
        Self::Draft,
        Self::Tag,
        Self::File,
        Self::Contact,
        Self::Calendar,
        Self::Event,
    ];

    /// Returns the collection path segment (e.g., `messages`).
    #[must_use]
    pub const fn collection_name(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Message => "messages",
            Self::Thread => "threads",
            Self::Draft => "drafts",
            Self::Tag => "tags",
            Self::File => "files",
            Self::Contact => "contacts",
            Self::Calendar => "calendars",
            Self::Event => "events",
        }
    }

    /// Returns the singular display name (e.g., `Message`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Message => "Message",
            Self::Thread => "Thread",
            Self::Draft => "Draft",
            Self::Tag => "Tag",
            Self::File => "File",
            Self::Contact => "Contact",
            Self::Calendar => "Calendar",
            Self::Event => "Event",
        }
    }

    /// Returns the path segment that precedes a namespace id.
    #[must_use]
    pub const fn api_root(self) -> &'static str {
        API_ROOT
    }

    /// Returns `true` if the kind is normally addressed under a namespace.
    ///
    /// The account is a top-level resource; a namespace passed for it is
    /// still honored when building URLs.
    #[must_use]
    pub const fn is_namespaced(self) -> bool {
        !matches!(self, Self::Account)
    }

    /// Returns the declared field names of this kind.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Account => ACCOUNT_FIELDS,
            Self::Message => MESSAGE_FIELDS,
            Self::Thread => THREAD_FIELDS,
            Self::Draft => DRAFT_FIELDS,
            Self::Tag => TAG_FIELDS,
            Self::File => FILE_FIELDS,
            Self::Contact => CONTACT_FIELDS,
            Self::Calendar => CALENDAR_FIELDS,
            Self::Event => EVENT_FIELDS,
        }
    }

    /// Returns `true` if `field` is one of the declared fields.
    #[must_use]
    pub fn declares(self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    /// Returns the encoding used for create and update bodies.
    #[must_use]
    pub const fn body_encoding(self) -> DataType {
        match self {
            Self::File => DataType::Multipart,
            _ => DataType::Json,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// Error returned when parsing an unknown collection name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resource kind '{0}'")]
pub struct UnknownResourceKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_name() == s)
            .ok_or_else(|| UnknownResourceKind(s.to_string()))
    }
}
