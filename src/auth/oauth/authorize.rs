//! Authorization URL generation.
//!
//! This is the first step of the authorization-code flow: send the user to
//! the returned URL, keep the returned state, and compare it on the
//! redirect with [`validate_callback`](crate::auth::oauth::validate_callback).
//!
//! # Example
//!
//! ```rust
//! use nylas_api::{NylasConfig, AppId, AppSecret};
//! use nylas_api::auth::oauth::authorization_url;
//!
//! let config = NylasConfig::builder()
//!     .app_id(AppId::new("my-app").unwrap())
//!     .app_secret(AppSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let request = authorization_url(&config, "https://myapp.example.com/callback", Some("ben@example.com"));
//! assert!(request.auth_url.starts_with("https://api.nylas.com/oauth/authorize?client_id=my-app"));
//! assert!(request.auth_url.contains("login_hint=ben%40example.com"));
//! ```

use crate::auth::oauth::state::StateParam;
use crate::config::NylasConfig;

/// Path of the authorization endpoint.
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// An authorization URL and the state generated for it.
///
/// Store `state` (e.g., in the user's session) and pass it to
/// [`validate_callback`](crate::auth::oauth::validate_callback) when the
/// provider redirects back.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
    /// The URL to redirect the user to.
    pub auth_url: String,
    /// The state parameter embedded in `auth_url`.
    pub state: StateParam,
}

// Verify AuthorizationRequest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthorizationRequest>();
};

/// Builds the provider's authorization URL.
///
/// Query parameters, in order: `client_id`, `redirect_uri`,
/// `response_type=code`, `scope`, `login_hint` (only when given) and a fresh
/// `state`. This function has no side effects.
#[must_use]
pub fn authorization_url(
    config: &NylasConfig,
    redirect_uri: &str,
    login_hint: Option<&str>,
) -> AuthorizationRequest {
    let state = StateParam::new();

    let mut params = vec![
        ("client_id", config.app_id().as_ref()),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("scope", config.scope()),
    ];
    if let Some(hint) = login_hint {
        params.push(("login_hint", hint));
    }
    params.push(("state", state.as_ref()));

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!(
        "{}{AUTHORIZE_PATH}?{query_string}",
        config.api_server().as_ref()
    );

    tracing::debug!(redirect_uri, "built authorization url");

    AuthorizationRequest { auth_url, state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiServer, AppId, AppSecret};

    fn create_test_config() -> NylasConfig {
        NylasConfig::builder()
            .app_id(AppId::new("test-app").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_url_contains_required_params() {
        let request = authorization_url(&create_test_config(), "http://localhost/cb", None);

        assert!(request
            .auth_url
            .starts_with("https://api.nylas.com/oauth/authorize?"));
        assert!(request.auth_url.contains("client_id=test-app"));
        assert!(request
            .auth_url
            .contains("redirect_uri=http%3A%2F%2Flocalhost%2Fcb"));
        assert!(request.auth_url.contains("response_type=code"));
        assert!(request.auth_url.contains("scope=email"));
        assert!(request
            .auth_url
            .ends_with(&format!("&state={}", request.state)));
    }

    #[test]
    fn test_login_hint_is_omitted_when_absent() {
        let request = authorization_url(&create_test_config(), "http://localhost/cb", None);
        assert!(!request.auth_url.contains("login_hint"));

        let request =
            authorization_url(&create_test_config(), "http://localhost/cb", Some("a@b.c"));
        assert!(request.auth_url.contains("&login_hint=a%40b.c&state="));
    }

    #[test]
    fn test_authorization_url_uses_configured_server_and_scope() {
        let config = NylasConfig::builder()
            .app_id(AppId::new("id").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .api_server(ApiServer::new("http://localhost:5555").unwrap())
            .scope("email,calendar")
            .build()
            .unwrap();

        let request = authorization_url(&config, "/cb", None);
        assert!(request
            .auth_url
            .starts_with("http://localhost:5555/oauth/authorize?"));
        assert!(request.auth_url.contains("scope=email%2Ccalendar"));
    }

    #[test]
    fn test_each_call_gets_a_fresh_state() {
        let config = create_test_config();
        let a = authorization_url(&config, "/cb", None);
        let b = authorization_url(&config, "/cb", None);
        assert_ne!(a.state, b.state);
    }
}
