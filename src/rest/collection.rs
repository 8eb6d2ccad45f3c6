//! Filterable views over one resource kind.
//!
//! A [`ResourceCollection`] binds a client, a kind, an optional namespace and
//! a set of base filters. It holds no results: every enumeration issues a new
//! request.
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::rest::Filters;
//!
//! let unread = client.threads(Some(&ns)).filter("unread", "true");
//!
//! for thread in unread.all(&Filters::new()).await? {
//!     println!("{:?}", thread.get("subject"));
//! }
//!
//! let newest = unread.first().await?;
//! ```

use serde_json::Value;

use crate::clients::{HttpError, RestClient};
use crate::config::NamespaceId;
use crate::rest::{Filters, Payload, ResourceInstance, ResourceKind};

/// A lazily queried view over one resource kind.
#[derive(Clone, Debug)]
pub struct ResourceCollection<'a> {
    client: &'a RestClient,
    kind: ResourceKind,
    namespace: Option<NamespaceId>,
    filters: Filters,
}

impl<'a> ResourceCollection<'a> {
    /// Creates a view with no base filters.
    #[must_use]
    pub fn new(client: &'a RestClient, kind: ResourceKind, namespace: Option<&NamespaceId>) -> Self {
        Self {
            client,
            kind,
            namespace: namespace.cloned(),
            filters: Filters::new(),
        }
    }

    /// Returns the bound kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the bound namespace.
    #[must_use]
    pub const fn namespace(&self) -> Option<&NamespaceId> {
        self.namespace.as_ref()
    }

    /// Returns the base filters.
    #[must_use]
    pub const fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Returns a new view with one more base filter.
    #[must_use]
    pub fn filter(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            filters: self.filters.clone().with(key, value),
            ..self.clone()
        }
    }

    /// Lists the collection. `filters` override the base filters.
    ///
    /// # Errors
    ///
    /// See [`RestClient::list`].
    pub async fn all(&self, filters: &Filters) -> Result<Vec<ResourceInstance>, HttpError> {
        let merged = self.filters.merged(filters);
        self.client
            .list(self.kind, self.namespace.as_ref(), &merged)
            .await
    }

    /// Returns the first element, requesting a single result.
    ///
    /// # Errors
    ///
    /// See [`RestClient::list`].
    pub async fn first(&self) -> Result<Option<ResourceInstance>, HttpError> {
        let items = self.all(&Filters::new().with("limit", "1")).await?;
        Ok(items.into_iter().next())
    }

    /// Fetches one resource by id. Base filters are sent along.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn find(&self, id: &str) -> Result<ResourceInstance, HttpError> {
        self.client
            .get(self.kind, self.namespace.as_ref(), id, &self.filters)
            .await
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// See [`RestClient::create`].
    pub async fn create(&self, payload: impl Into<Payload>) -> Result<ResourceInstance, HttpError> {
        self.client
            .create(self.kind, self.namespace.as_ref(), payload.into())
            .await
    }

    /// Updates a resource.
    ///
    /// # Errors
    ///
    /// See [`RestClient::update`].
    pub async fn update(
        &self,
        id: &str,
        payload: impl Into<Payload>,
    ) -> Result<ResourceInstance, HttpError> {
        self.client
            .update(self.kind, self.namespace.as_ref(), id, payload.into())
            .await
    }

    /// Deletes a resource and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::delete`].
    pub async fn delete(&self, id: &str) -> Result<Value, HttpError> {
        self.client
            .delete(self.kind, self.namespace.as_ref(), id)
            .await
    }
}

// `/account` is a single object, not a collection; use `RestClient::account`.
impl RestClient {
    /// Returns a view over messages.
    #[must_use]
    pub fn messages(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Message, namespace)
    }

    /// Returns a view over threads.
    #[must_use]
    pub fn threads(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Thread, namespace)
    }

    /// Returns a view over drafts.
    #[must_use]
    pub fn drafts(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Draft, namespace)
    }

    /// Returns a view over tags.
    #[must_use]
    pub fn tags(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Tag, namespace)
    }

    /// Returns a view over files.
    #[must_use]
    pub fn files(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::File, namespace)
    }

    /// Returns a view over contacts.
    #[must_use]
    pub fn contacts(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Contact, namespace)
    }

    /// Returns a view over calendars.
    #[must_use]
    pub fn calendars(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Calendar, namespace)
    }

    /// Returns a view over events.
    #[must_use]
    pub fn events(&self, namespace: Option<&NamespaceId>) -> ResourceCollection<'_> {
        ResourceCollection::new(self, ResourceKind::Event, namespace)
    }
}
