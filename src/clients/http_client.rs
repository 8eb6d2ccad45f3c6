//! HTTP client for Nylas API communication.
//!
//! This module provides the [`HttpClient`] type, the single place where
//! requests meet the network. It owns the `reqwest` client, the base URI and
//! the default headers (Basic auth, client identification, user agent).

use std::collections::HashMap;
use std::fmt;

use base64::prelude::*;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartPart, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, NylasConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the client identification header.
pub const WRAPPER_HEADER: &str = "X-Nylas-API-Wrapper";

/// HTTP client for making requests to the Nylas API.
///
/// The client handles:
/// - URL construction from the configured API server
/// - Default headers including `Authorization`, `X-Nylas-API-Wrapper` and `User-Agent`
/// - Body encoding (JSON, form, multipart)
/// - Mapping non-2xx responses to [`HttpError::Api`]
///
/// There are no retries: every failure surfaces to the caller immediately.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.nylas.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// The Authorization value is the encoded token; keep it out of logs.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

/// Builds the `Authorization` header value for a token.
///
/// The API expects the token as the Basic-auth user name with an empty
/// password. A missing token encodes as `base64(":")`.
///
/// # Example
///
/// ```rust
/// use nylas_api::clients::basic_auth_header;
/// use nylas_api::AccessToken;
///
/// let header = basic_auth_header(Some(&AccessToken::new("abc")));
/// assert_eq!(header, "Basic YWJjOg==");
/// assert_eq!(basic_auth_header(None), "Basic Og==");
/// ```
#[must_use]
pub fn basic_auth_header(token: Option<&AccessToken>) -> String {
    let token: &str = token.map_or("", |t| t.as_ref());
    format!("Basic {}", BASE64_STANDARD.encode(format!("{token}:")))
}

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// The initial `Authorization` header is built from
    /// [`NylasConfig::access_token`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &NylasConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Nylas API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            WRAPPER_HEADER.to_string(),
            config.wrapper_name().to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            basic_auth_header(config.access_token()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.api_server().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Replaces the bearer token used for authenticated requests.
    pub fn set_access_token(&mut self, token: Option<&AccessToken>) {
        self.default_headers
            .insert("Authorization".to_string(), basic_auth_header(token));
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`Transport`)
    /// - A non-2xx response is received (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        let overridden = |key: &str| {
            request
                .extra_headers
                .as_ref()
                .is_some_and(|extra| extra.keys().any(|k| k.eq_ignore_ascii_case(key)))
        };
        for (key, value) in &self.default_headers {
            if (!request.authenticated && key == "Authorization") || overridden(key) {
                continue;
            }
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = request.body {
            req_builder = match body {
                RequestBody::Json(value) => req_builder.json(&value),
                RequestBody::Form(fields) => req_builder.form(&fields),
                RequestBody::Multipart(parts) => req_builder.multipart(Self::build_form(parts)?),
            };
        }

        // Extra headers replace defaults of the same name.
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status = code, path = %request.path, "received response");

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            path = %request.path,
            request_id = response.request_id().unwrap_or("-"),
            "request failed"
        );

        Err(HttpError::Api(HttpResponseError {
            code,
            body: response.text(),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Converts multipart parts into a reqwest form.
    fn build_form(parts: Vec<MultipartPart>) -> Result<reqwest::multipart::Form, HttpError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name, value),
                MultipartPart::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    let mut file_part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
                    if let Some(mime) = content_type {
                        file_part = file_part.mime_str(&mime).map_err(|_| {
                            InvalidHttpRequestError::InvalidContentType {
                                content_type: mime.clone(),
                            }
                        })?;
                    }
                    form.part(name, file_part)
                }
            };
        }
        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
