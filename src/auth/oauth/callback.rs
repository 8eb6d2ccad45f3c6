//! Redirect callback validation.
//!
//! When the provider redirects back it appends `code` and `state` to the
//! redirect URI. [`validate_callback`] checks the state against the one
//! stored with the authorization URL and hands back the code for
//! [`RestClient::exchange_code`](crate::clients::RestClient::exchange_code).
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::auth::oauth::{validate_callback, AuthCallback, StateParam};
//!
//! let callback = AuthCallback { code: query.code, state: query.state };
//! let stored = StateParam::from_raw(session.get("oauth_state")?);
//!
//! let code = validate_callback(&callback, &stored)?;
//! let token = client.exchange_code(code).await?;
//! ```

use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;

/// Query parameters of the OAuth redirect.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AuthCallback {
    /// The authorization code.
    pub code: String,
    /// The state echoed back by the provider.
    pub state: String,
}

/// Validates the redirect and returns the authorization code.
///
/// # Errors
///
/// Returns [`OAuthError::InvalidCallback`] if `code` is empty, and
/// [`OAuthError::StateMismatch`] if `state` differs from `expected`.
pub fn validate_callback<'a>(
    callback: &'a AuthCallback,
    expected: &StateParam,
) -> Result<&'a str, OAuthError> {
    if callback.code.is_empty() {
        return Err(OAuthError::InvalidCallback {
            reason: "code parameter is empty".to_string(),
        });
    }

    if !constant_time_compare(&callback.state, expected.as_ref()) {
        tracing::warn!("oauth callback state mismatch");
        return Err(OAuthError::StateMismatch {
            expected: expected.to_string(),
            received: callback.state.clone(),
        });
    }

    Ok(&callback.code)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    // ct_eq handles different lengths
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
