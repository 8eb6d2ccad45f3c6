//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Secrets mask themselves in `Debug` output.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Nylas application id (the OAuth `client_id`).
///
/// # Example
///
/// ```rust
/// use nylas_api::AppId;
///
/// let id = AppId::new("my-app-id").unwrap();
/// assert_eq!(id.as_ref(), "my-app-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated application id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Nylas application secret (the OAuth `client_secret`).
///
/// The `Debug` implementation masks the secret value.
///
/// # Example
///
/// ```rust
/// use nylas_api::AppSecret;
///
/// let secret = AppSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AppSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// Creates a new validated application secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAppSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AppSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*****)")
    }
}

/// A bearer token issued by the OAuth code exchange.
///
/// Unlike the application credentials, an access token may be empty: the
/// API accepts `base64(":")` for unauthenticated calls. `Debug` masks the
/// value; serialization writes the plain string so tokens can be persisted.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if the token is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

/// A validated namespace id.
///
/// Namespaces scope a resource to one connected account and are inserted
/// into the URL path, so they must form a single path segment.
///
/// # Example
///
/// ```rust
/// use nylas_api::NamespaceId;
///
/// let ns = NamespaceId::new("awa6ltos76vz5hvphkp8k17nt").unwrap();
/// assert_eq!(ns.to_string(), "awa6ltos76vz5hvphkp8k17nt");
/// assert!(NamespaceId::new("a/b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamespaceId(String);

impl NamespaceId {
    /// Creates a new validated namespace id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathSegment`] if the id is empty or
    /// contains a path, query or fragment delimiter.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if !is_valid_segment(&id) {
            return Err(ConfigError::InvalidPathSegment { segment: id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for NamespaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NamespaceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NamespaceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Returns `true` if `segment` can be placed verbatim between two slashes.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(['/', '?', '#'])
}

/// A validated API server URL.
///
/// The URL must carry a scheme and a host. A trailing slash is stripped so
/// that paths can be appended with a leading `/`.
///
/// # Example
///
/// ```rust
/// use nylas_api::ApiServer;
///
/// let server = ApiServer::new("https://api.nylas.com/").unwrap();
/// assert_eq!(server.as_ref(), "https://api.nylas.com");
/// assert_eq!(server.scheme(), "https");
/// assert_eq!(server.host_name(), Some("api.nylas.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiServer {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiServer {
    /// The hosted API server.
    pub const DEFAULT: &'static str = "https://api.nylas.com";

    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiServer`] if the URL has no scheme,
    /// no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiServer { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiServer { url });
        }

        if url.contains(['?', '#']) {
            return Err(ConfigError::InvalidApiServer { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiServer { url });
        }

        let remainder = &url[host_start..];
        let host_end = if remainder.starts_with('[') {
            // Bracketed IPv6 literal: the host runs through the closing bracket.
            let close = remainder
                .find(']')
                .ok_or_else(|| ConfigError::InvalidApiServer { url: url.clone() })?;
            host_start + close + 1
        } else {
            remainder
                .find([':', '/'])
                .map_or(url.len(), |i| host_start + i)
        };

        if host_end == host_start {
            return Err(ConfigError::InvalidApiServer { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiServer {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
