//! HTTP-specific error types for the Nylas API client.
//!
//! # Error Handling
//!
//! Every API operation returns [`HttpError`], whose variants separate the
//! failure modes callers usually want to tell apart:
//!
//! - [`HttpError::Transport`]: the request never produced a response
//!   (connection, TLS, timeout)
//! - [`HttpError::Api`]: the API answered with a non-2xx status
//! - [`HttpError::NotFound`]: a single-resource fetch answered 404
//! - [`HttpError::Decode`]: the body was not the JSON shape expected
//! - [`HttpError::InvalidRequest`]: the request was rejected before sending
//!
//! None of these are retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::clients::HttpError;
//!
//! match client.get(ResourceKind::Message, Some(&ns), "abc", &Filters::new()).await {
//!     Ok(message) => println!("{:?}", message.get("subject")),
//!     Err(HttpError::NotFound { .. }) => println!("no such message"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// The raw response body is kept verbatim for caller inspection.
///
/// # Example
///
/// ```rust
/// use nylas_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     body: r#"{"message":"bad filter"}"#.to_string(),
///     error_reference: None,
/// };
/// assert!(error.to_string().contains("400"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API request failed with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The undecoded response body.
    pub body: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a response body cannot be decoded as expected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response body: {reason}")]
pub struct DecodeError {
    /// What went wrong while decoding.
    pub reason: String,
    /// The undecoded response body.
    pub body: String,
}

impl DecodeError {
    /// Creates a decode error from a reason and the offending body.
    #[must_use]
    pub fn new(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            body: body.into(),
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The payload cannot be encoded for the target resource.
    #[error("Unsupported payload for resource '{resource}': {reason}.")]
    UnsupportedPayload {
        /// The collection name of the resource.
        resource: &'static str,
        /// Why the payload was rejected.
        reason: &'static str,
    },

    /// A file part carries a content type that is not a valid MIME type.
    #[error("Invalid content type '{content_type}' for file upload.")]
    InvalidContentType {
        /// The rejected content type.
        content_type: String,
    },
}

/// Unified error type for all API operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, TLS, or timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response.
    #[error(transparent)]
    Api(#[from] HttpResponseError),

    /// A single-resource fetch answered 404.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The collection name of the resource (e.g., "messages").
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// The response body was not the JSON expected.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.code),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Turns a 404 [`HttpError::Api`] into [`HttpError::NotFound`].
    ///
    /// Any other error is returned unchanged.
    #[must_use]
    pub fn not_found_as(self, resource: &'static str, id: &str) -> Self {
        match self {
            Self::Api(e) if e.code == 404 => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            other => other,
        }
    }
}
