//! HTTP response types for the Nylas API client.
//!
//! [`HttpResponse`] keeps the body undecoded; callers decode it with
//! [`HttpResponse::json`] where JSON is expected, so a malformed body always
//! surfaces as a [`DecodeError`] instead of a silent default.

use std::collections::HashMap;

use crate::clients::errors::DecodeError;

/// An HTTP response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is empty or not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, DecodeError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::new("empty body", String::new()));
        }
        serde_json::from_slice(&self.body).map_err(|e| DecodeError::new(e.to_string(), self.text()))
    }
}
