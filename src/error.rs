//! Error types for the Nylas API client.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the API live in [`crate::clients`] and [`crate::auth::oauth`].
//!
//! # Example
//!
//! ```rust
//! use nylas_api::{AppId, ConfigError};
//!
//! let result = AppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`NylasConfig`](crate::NylasConfig).
///
/// Every newtype constructor and the config builder fail fast with one of
/// these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Application id cannot be empty.
    #[error("Application id cannot be empty. Please provide the id of your Nylas application.")]
    EmptyAppId,

    /// Application secret cannot be empty.
    #[error("Application secret cannot be empty. Please provide the secret of your Nylas application.")]
    EmptyAppSecret,

    /// The API server URL is invalid.
    #[error("Invalid API server URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.nylas.com').")]
    InvalidApiServer {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A namespace id is not a single path segment.
    #[error("Invalid path segment '{segment}'. Segments must be non-empty and cannot contain '/', '?' or '#'.")]
    InvalidPathSegment {
        /// The invalid segment that was provided.
        segment: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
