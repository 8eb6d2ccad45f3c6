//! URL building for resource operations.
//!
//! Every outbound URL has the shape
//!
//! ```text
//! server [/{api_root}/{namespace}] /{collection} [/{id}] [/{extra}] [?{query}]
//! ```
//!
//! The namespace segment pair is omitted entirely when no namespace is given.
//! Query parameters come from [`Filters`]; the reserved `extra` key is never
//! sent as a query parameter and instead becomes a trailing path segment on
//! single-resource fetches.
//!
//! # Example
//!
//! ```rust
//! use nylas_api::rest::{build_path, Filters, ResourceKind};
//! use nylas_api::NamespaceId;
//!
//! let ns = NamespaceId::new("ns-1").unwrap();
//! let (extra, query) = Filters::new().with("extra", "raw").with("view", "expanded").split_extra();
//!
//! let path = build_path(ResourceKind::Message, Some(&ns), Some("abc"), extra.as_deref());
//! assert_eq!(path, "/n/ns-1/messages/abc/raw");
//! assert_eq!(query.get("view"), Some(&"expanded".to_string()));
//! assert!(!query.contains_key("extra"));
//! ```

use std::collections::BTreeMap;

use crate::config::NamespaceId;
use crate::rest::ResourceKind;

/// The filter key consumed as an additional path segment.
///
/// The value is always exactly one segment: a `/` inside it is
/// percent-encoded, so multi-segment extras such as `a/b` are not supported.
pub const EXTRA_KEY: &str = "extra";

/// Query filters for a resource operation.
///
/// Keys are kept sorted so the same filters always produce the same query
/// string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filters with one more entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value of an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns these filters overridden by `other`.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.0.clone();
        merged.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(merged)
    }

    /// Splits off the reserved `extra` entry.
    ///
    /// Returns the extra path segment (if any, and non-empty) and the
    /// remaining entries as query parameters.
    #[must_use]
    pub fn split_extra(mut self) -> (Option<String>, BTreeMap<String, String>) {
        let extra = self.0.remove(EXTRA_KEY).filter(|e| !e.is_empty());
        (extra, self.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Filters {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Builds the path (everything after the server URL, before the query).
///
/// `id` and `extra` are percent-encoded so that each stays one segment.
#[must_use]
pub fn build_path(
    kind: ResourceKind,
    namespace: Option<&NamespaceId>,
    id: Option<&str>,
    extra: Option<&str>,
) -> String {
    let mut path = String::new();

    if let Some(namespace) = namespace {
        path.push('/');
        path.push_str(kind.api_root());
        path.push('/');
        path.push_str(namespace.as_ref());
    }

    path.push('/');
    path.push_str(kind.collection_name());

    if let Some(id) = id {
        path.push('/');
        path.push_str(&urlencoding::encode(id));
    }

    if let Some(extra) = extra {
        path.push('/');
        path.push_str(&urlencoding::encode(extra));
    }

    path
}

/// Builds the full URL without the query string.
#[must_use]
pub fn build_url(
    server: &str,
    kind: ResourceKind,
    namespace: Option<&NamespaceId>,
    id: Option<&str>,
    extra: Option<&str>,
) -> String {
    format!("{server}{}", build_path(kind, namespace, id, extra))
}
