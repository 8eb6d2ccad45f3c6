//! REST client for the Nylas API.
//!
//! [`RestClient`] is the entry point of the crate. It owns the configuration
//! and the current access token and exposes:
//!
//! - the generic operations `list`, `get`, `get_raw`, `create`, `update` and
//!   `delete`, each parameterized by a [`ResourceKind`](crate::rest::ResourceKind)
//! - `account` for the account behind the token
//! - one [`ResourceCollection`](crate::rest::ResourceCollection) accessor per kind
//! - the OAuth helpers `authorization_url` and `exchange_code`
//!
//! # URLs
//!
//! ```text
//! {server}[/n/{namespace}]/{collection}[/{id}][/{extra}][?{filters}]
//! ```
//!
//! The namespace pair is omitted when no namespace is given and `extra` is
//! only used by single-resource fetches.
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::{RestClient, NamespaceId};
//! use nylas_api::rest::{Filters, ResourceKind};
//!
//! let client = RestClient::new(config)?;
//! let ns = NamespaceId::new("awa6ltos76vz5hvphkp8k17nt")?;
//!
//! let message = client.get(ResourceKind::Message, Some(&ns), "84umizq7c4jtrew491brpa6iu", &Filters::new()).await?;
//! let raw = client
//!     .get_raw(ResourceKind::Message, Some(&ns), "84umizq7c4jtrew491brpa6iu", &Filters::new().with("extra", "raw"))
//!     .await?;
//! ```

mod client;

pub use client::RestClient;
