//! Configuration types for the Nylas API client.
//!
//! This module provides the configuration used to construct a
//! [`RestClient`](crate::clients::RestClient).
//!
//! # Overview
//!
//! - [`NylasConfig`]: Application credentials and client settings
//! - [`NylasConfigBuilder`]: A builder for constructing [`NylasConfig`] instances
//! - [`AppId`], [`AppSecret`]: Validated application credentials
//! - [`AccessToken`]: A bearer token with masked debug output
//! - [`ApiServer`]: The validated API server URL
//! - [`NamespaceId`]: A validated namespace path segment
//!
//! # Example
//!
//! ```rust
//! use nylas_api::{NylasConfig, AppId, AppSecret};
//!
//! let config = NylasConfig::builder()
//!     .app_id(AppId::new("my-app-id").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_server().as_ref(), "https://api.nylas.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiServer, AppId, AppSecret, NamespaceId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default OAuth scope requested by [`authorization_url`](crate::auth::oauth::authorization_url).
pub const DEFAULT_SCOPE: &str = "email";

/// Default value of the `X-Nylas-API-Wrapper` client identification header.
pub const DEFAULT_WRAPPER_NAME: &str = "rust";

/// Configuration for the Nylas API client.
///
/// Holds the application credentials, an optional bearer token and the
/// transport settings. There is no process-wide state: every client owns its
/// own copy.
///
/// # Thread Safety
///
/// `NylasConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NylasConfig {
    app_id: AppId,
    app_secret: AppSecret,
    access_token: Option<AccessToken>,
    api_server: ApiServer,
    scope: String,
    wrapper_name: String,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NylasConfig {
    /// Creates a new builder for constructing a `NylasConfig`.
    #[must_use]
    pub fn builder() -> NylasConfigBuilder {
        NylasConfigBuilder::new()
    }

    /// Returns the application id.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the initial bearer token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API server URL.
    #[must_use]
    pub const fn api_server(&self) -> &ApiServer {
        &self.api_server
    }

    /// Returns the OAuth scope requested in authorization URLs.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the client identification header value.
    #[must_use]
    pub fn wrapper_name(&self) -> &str {
        &self.wrapper_name
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify NylasConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NylasConfig>();
};

/// Builder for constructing [`NylasConfig`] instances.
///
/// Required fields are `app_id` and `app_secret`.
///
/// # Defaults
///
/// - `api_server`: `https://api.nylas.com`
/// - `scope`: `email`
/// - `wrapper_name`: `rust`
/// - `access_token`, `user_agent_prefix`, `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use nylas_api::{NylasConfig, AppId, AppSecret, AccessToken, ApiServer};
///
/// let config = NylasConfig::builder()
///     .app_id(AppId::new("id").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .access_token(AccessToken::new("token"))
///     .api_server(ApiServer::new("http://localhost:5555").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Default)]
pub struct NylasConfigBuilder {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    access_token: Option<AccessToken>,
    api_server: Option<ApiServer>,
    scope: Option<String>,
    wrapper_name: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NylasConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application id (required).
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets an existing bearer token, skipping the OAuth exchange.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API server URL.
    #[must_use]
    pub fn api_server(mut self, server: ApiServer) -> Self {
        self.api_server = Some(server);
        self
    }

    /// Sets the OAuth scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the client identification header value.
    #[must_use]
    pub fn wrapper_name(mut self, name: impl Into<String>) -> Self {
        self.wrapper_name = Some(name.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout. Unset means the transport default.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`NylasConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id` or
    /// `app_secret` are not set.
    pub fn build(self) -> Result<NylasConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;

        Ok(NylasConfig {
            app_id,
            app_secret,
            access_token: self.access_token,
            api_server: self.api_server.unwrap_or_default(),
            scope: self.scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            wrapper_name: self
                .wrapper_name
                .unwrap_or_else(|| DEFAULT_WRAPPER_NAME.to_string()),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
