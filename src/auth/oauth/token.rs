//! Authorization-code exchange.
//!
//! The exchange is a form-encoded POST to `/oauth/token`, sent without the
//! client's `Authorization` header. Callers normally go through
//! [`RestClient::exchange_code`](crate::clients::RestClient::exchange_code),
//! which also installs the returned token.

use serde_json::Value;

use crate::auth::oauth::error::OAuthError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, RequestBody};
use crate::config::{AccessToken, NylasConfig};

/// Path of the token endpoint.
pub const TOKEN_PATH: &str = "/oauth/token";

/// Exchanges an authorization code for an access token.
///
/// Returns `Ok(None)` when the response is valid JSON without a string
/// `access_token`.
///
/// # Errors
///
/// Returns [`OAuthError::HttpError`] on transport failure, a non-2xx status
/// or a body that is not JSON.
pub async fn request_access_token(
    http_client: &HttpClient,
    config: &NylasConfig,
    code: &str,
) -> Result<Option<AccessToken>, OAuthError> {
    let form = vec![
        ("client_id".to_string(), config.app_id().as_ref().to_string()),
        (
            "client_secret".to_string(),
            config.app_secret().as_ref().to_string(),
        ),
        ("grant_type".to_string(), "authorization_code".to_string()),
        ("code".to_string(), code.to_string()),
    ];

    let request = HttpRequest::builder(HttpMethod::Post, TOKEN_PATH)
        .body(RequestBody::Form(form))
        .header("Accept", "text/plain")
        .unauthenticated()
        .build()
        .map_err(HttpError::from)?;

    let response = http_client.request(request).await?;
    let body = response.json().map_err(HttpError::from)?;

    let token = match body.get("access_token") {
        Some(Value::String(token)) => Some(AccessToken::new(token.as_str())),
        _ => None,
    };

    tracing::debug!(received = token.is_some(), "token exchange completed");

    Ok(token)
}
