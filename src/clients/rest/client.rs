//! REST client for the Nylas API.
//!
//! This module provides the [`RestClient`] type: the generic resource
//! operations parameterized by a [`ResourceKind`], the raw passthrough fetch,
//! the account fetch and the OAuth helpers.

use serde_json::Value;

use crate::auth::oauth::{self, AuthorizationRequest, OAuthError};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{AccessToken, NamespaceId, NylasConfig};
use crate::rest::{
    build_path, instance_from_value, instances_from_value, Filters, Payload, RawResponse,
    ResourceInstance, ResourceKind,
};

/// REST client for the Nylas API.
///
/// Owns the configuration and the current access token. Every operation is
/// a single HTTP round-trip; nothing is cached or retried.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Read operations take `&self` and can run
/// concurrently; [`exchange_code`](Self::exchange_code) takes `&mut self`, so
/// token updates are serialized by the borrow checker.
///
/// # Example
///
/// ```rust,ignore
/// use nylas_api::{NylasConfig, AppId, AppSecret, AccessToken, NamespaceId, RestClient};
/// use nylas_api::rest::{Filters, ResourceKind};
///
/// let config = NylasConfig::builder()
///     .app_id(AppId::new("your-app-id")?)
///     .app_secret(AppSecret::new("your-secret")?)
///     .access_token(AccessToken::new("token"))
///     .build()?;
/// let client = RestClient::new(config)?;
///
/// let ns = NamespaceId::new("awa6ltos76vz5hvphkp8k17nt")?;
/// let threads = client.list(ResourceKind::Thread, Some(&ns), &Filters::new()).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The client configuration.
    config: NylasConfig,
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The token currently used for authenticated requests.
    access_token: Option<AccessToken>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: NylasConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        let access_token = config.access_token().cloned();

        let server: &str = config.api_server().as_ref();
        tracing::debug!(
            server,
            authenticated = access_token.is_some(),
            "created rest client"
        );

        Ok(Self {
            config,
            http_client,
            access_token,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &NylasConfig {
        &self.config
    }

    /// Returns the current access token, if any.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Replaces the access token used for subsequent requests.
    pub fn set_access_token(&mut self, token: Option<AccessToken>) {
        self.http_client.set_access_token(token.as_ref());
        self.access_token = token;
    }

    /// Builds the provider's authorization URL with a fresh state.
    ///
    /// See [`oauth::authorization_url`].
    #[must_use]
    pub fn authorization_url(
        &self,
        redirect_uri: &str,
        login_hint: Option<&str>,
    ) -> AuthorizationRequest {
        oauth::authorization_url(&self.config, redirect_uri, login_hint)
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// If the response carries a string `access_token`, it becomes the
    /// client's token and is returned. Otherwise the token is left unchanged
    /// and the previous value is returned.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::HttpError`] on transport failure, a non-2xx
    /// status or a non-JSON body. The current token is kept in every case.
    pub async fn exchange_code(&mut self, code: &str) -> Result<Option<AccessToken>, OAuthError> {
        let received =
            oauth::request_access_token(&self.http_client, &self.config, code).await?;

        if let Some(token) = received {
            self.set_access_token(Some(token));
        }

        Ok(self.access_token.clone())
    }

    /// Lists the resources of a kind.
    ///
    /// `filters` are sent as query parameters, except `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] on any non-2xx status (including 404) and
    /// [`HttpError::Decode`] if the body is not a JSON array of objects.
    pub async fn list(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        filters: &Filters,
    ) -> Result<Vec<ResourceInstance>, HttpError> {
        let (_, query) = filters.clone().split_extra();
        let path = build_path(kind, namespace, None, None);

        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        let response = self.http_client.request(request).await?;

        let instances = instances_from_value(kind, namespace, response.json()?)?;
        tracing::debug!(kind = %kind, count = instances.len(), "listed resources");
        Ok(instances)
    }

    /// Fetches one resource.
    ///
    /// A non-empty `extra` filter is appended as a path segment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotFound`] on 404, [`HttpError::Api`] on any other
    /// non-2xx status and [`HttpError::Decode`] if the body is not a JSON
    /// object.
    pub async fn get(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        id: &str,
        filters: &Filters,
    ) -> Result<ResourceInstance, HttpError> {
        let response = self.fetch(kind, namespace, id, filters).await?;
        Ok(instance_from_value(kind, namespace, response.json()?)?)
    }

    /// Fetches one resource without decoding the body.
    ///
    /// Uses the same URL rules as [`get`](Self::get). Useful with
    /// `extra=raw` (a message's MIME source) or `extra=download` (file
    /// content).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotFound`] on 404 and [`HttpError::Api`] on any
    /// other non-2xx status.
    pub async fn get_raw(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        id: &str,
        filters: &Filters,
    ) -> Result<RawResponse, HttpError> {
        let response = self.fetch(kind, namespace, id, filters).await?;
        Ok(RawResponse::from(response))
    }

    /// Fetches the account behind the current token from `/account`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] on a non-2xx status and
    /// [`HttpError::Decode`] if the body is not a JSON object.
    pub async fn account(&self) -> Result<ResourceInstance, HttpError> {
        let kind = ResourceKind::Account;
        let request = HttpRequest::builder(HttpMethod::Get, build_path(kind, None, None, None))
            .build()?;
        let response = self.http_client.request(request).await?;
        Ok(instance_from_value(kind, None, response.json()?)?)
    }

    /// Creates a resource.
    ///
    /// Files are sent as `multipart/form-data`; every other kind as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the payload does not suit the
    /// kind (nothing is sent), [`HttpError::Api`] on a non-2xx status and
    /// [`HttpError::Decode`] if the body is not a JSON object.
    pub async fn create(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        payload: Payload,
    ) -> Result<ResourceInstance, HttpError> {
        let body = payload.into_body(kind)?;
        let request = HttpRequest::builder(HttpMethod::Post, build_path(kind, namespace, None, None))
            .body(body)
            .build()?;
        let response = self.http_client.request(request).await?;
        Ok(instance_from_value(kind, namespace, response.json()?)?)
    }

    /// Updates a resource.
    ///
    /// Uses the same body encoding as [`create`](Self::create). The response
    /// is decoded for every kind, files included.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn update(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        id: &str,
        payload: Payload,
    ) -> Result<ResourceInstance, HttpError> {
        let body = payload.into_body(kind)?;
        let request =
            HttpRequest::builder(HttpMethod::Put, build_path(kind, namespace, Some(id), None))
                .body(body)
                .build()?;
        let response = self.http_client.request(request).await?;
        Ok(instance_from_value(kind, namespace, response.json()?)?)
    }

    /// Deletes a resource and returns the decoded response body as-is.
    ///
    /// An empty body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] on a non-2xx status and
    /// [`HttpError::Decode`] if a non-empty body is not valid JSON.
    pub async fn delete(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        id: &str,
    ) -> Result<Value, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, build_path(kind, namespace, Some(id), None))
                .build()?;
        let response = self.http_client.request(request).await?;

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(response.json()?)
    }

    /// Sends a single-resource GET, mapping 404 to [`HttpError::NotFound`].
    async fn fetch(
        &self,
        kind: ResourceKind,
        namespace: Option<&NamespaceId>,
        id: &str,
        filters: &Filters,
    ) -> Result<HttpResponse, HttpError> {
        let (extra, query) = filters.clone().split_extra();
        let path = build_path(kind, namespace, Some(id), extra.as_deref());

        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;

        self.http_client
            .request(request)
            .await
            .map_err(|e| e.not_found_as(kind.collection_name(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::basic_auth_header;
    use crate::config::{AppId, AppSecret};

    fn create_test_client(token: Option<&str>) -> RestClient {
        let mut builder = NylasConfig::builder()
            .app_id(AppId::new("test-app").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap());
        if let Some(token) = token {
            builder = builder.access_token(AccessToken::new(token));
        }
        RestClient::new(builder.build().unwrap()).unwrap()
    }

    #[test]
    fn test_new_takes_token_from_config() {
        let client = create_test_client(Some("tok"));
        assert_eq!(client.access_token(), Some(&AccessToken::new("tok")));

        let client = create_test_client(None);
        assert!(client.access_token().is_none());
    }

    #[test]
    fn test_set_access_token_replaces_token() {
        let mut client = create_test_client(None);
        client.set_access_token(Some(AccessToken::new("new")));
        assert_eq!(client.access_token(), Some(&AccessToken::new("new")));

        client.set_access_token(None);
        assert!(client.access_token().is_none());
    }

    #[test]
    fn test_authorization_url_uses_client_config() {
        let client = create_test_client(None);
        let request = client.authorization_url("/cb", None);
        assert!(request.auth_url.contains("client_id=test-app"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = create_test_client(Some("very-secret-token"));
        let debug = format!("{client:?}");
        assert!(!debug.contains("very-secret-token"));
        assert!(!debug.contains(&basic_auth_header(client.access_token())));
    }
}
