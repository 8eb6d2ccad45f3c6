//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::StateMismatch`]: the callback `state` differs from the stored one
//! - [`OAuthError::InvalidCallback`]: callback parameters are missing or empty
//! - [`OAuthError::HttpError`]: the token exchange request failed
//!
//! # Example
//!
//! ```rust
//! use nylas_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during the OAuth authorization-code flow.
///
/// A failed exchange never clears the client's current token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The `state` echoed on the redirect does not match the stored value.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state generated with the authorization URL.
        expected: String,
        /// The state received in the callback.
        received: String,
    },

    /// Callback parameters are missing or empty.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// What is wrong with the callback.
        reason: String,
    },

    /// The token exchange failed in transport, with a non-2xx status, or
    /// with an undecodable body.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
