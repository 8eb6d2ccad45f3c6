//! Resource access layer.
//!
//! This module describes the remote resources and the values exchanged with
//! them:
//!
//! - [`ResourceKind`]: one descriptor per resource kind (collection name,
//!   declared fields, body encoding)
//! - [`Filters`] and [`build_path`]: query filters and URL construction
//! - [`ResourceInstance`] and [`make_instance`]: decoded resources
//! - [`ResourceCollection`]: a filterable, lazily queried view over one kind
//! - [`Payload`] and [`FileUpload`]: create and update bodies
//! - [`RawResponse`]: an undecoded response for passthrough fetches
//! - [`resources`]: typed models for each kind
//!
//! The operations themselves live on [`RestClient`](crate::clients::RestClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::rest::{Filters, ResourceKind};
//! use nylas_api::rest::resources::Message;
//!
//! let ns = NamespaceId::new("awa6ltos76vz5hvphkp8k17nt")?;
//!
//! // Generic operations
//! let messages = client.list(ResourceKind::Message, Some(&ns), &Filters::new().with("limit", "10")).await?;
//! let first: Message = messages[0].parse()?;
//!
//! // Or through a collection view
//! let tag = client.tags(Some(&ns)).create(serde_json::json!({"name": "todo"})).await?;
//! client.tags(Some(&ns)).delete(tag.id().unwrap_or_default()).await?;
//! ```

mod collection;
mod instance;
mod path;
mod payload;
mod resource;
mod response;
pub mod resources;

pub use collection::ResourceCollection;
pub(crate) use instance::{instance_from_value, instances_from_value};
pub use instance::{make_instance, ResourceInstance};
pub use path::{build_path, build_url, Filters, EXTRA_KEY};
pub use payload::{FileUpload, Payload, FILE_FIELD};
pub use resource::{ResourceKind, UnknownResourceKind, API_ROOT};
pub use response::RawResponse;
