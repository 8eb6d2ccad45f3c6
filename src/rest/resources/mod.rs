//! Typed models for each resource kind.
//!
//! Generic operations return [`ResourceInstance`](crate::rest::ResourceInstance)
//! values; these structs give them a typed shape through
//! [`ResourceInstance::parse`](crate::rest::ResourceInstance::parse):
//!
//! ```rust,ignore
//! use nylas_api::rest::resources::Thread;
//!
//! for instance in client.threads(Some(&ns)).all(&Filters::new()).await? {
//!     let thread: Thread = instance.parse()?;
//!     println!("{}: {:?}", thread.id, thread.subject);
//! }
//! ```
//!
//! Every model requires `id`; all other fields are optional and unknown
//! fields are ignored. Timestamps are Unix seconds decoded into
//! `chrono::DateTime<Utc>`.
//!
//! | Kind | Model |
//! |------|-------|
//! | `account` | [`Account`] |
//! | `messages` | [`Message`] |
//! | `threads` | [`Thread`] |
//! | `drafts` | [`Draft`] |
//! | `tags` | [`Tag`] |
//! | `files` | [`File`] |
//! | `contacts` | [`Contact`] |
//! | `calendars` | [`Calendar`] |
//! | `events` | [`Event`] |

mod account;
mod calendar;
mod common;
mod contact;
mod mail;

pub use account::Account;
pub use calendar::{Calendar, Event};
pub use common::{EventWhen, Participant};
pub(crate) use common::null_as_empty;
pub use contact::{Contact, PhoneNumber};
pub use mail::{Draft, File, Message, Tag, Thread};
