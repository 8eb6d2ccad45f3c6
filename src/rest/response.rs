//! Undecoded responses returned by [`RestClient::get_raw`].
//!
//! [`RawResponse`] keeps the status, content type and body bytes exactly as
//! received. It derefs to the body so it can be used wherever a byte slice
//! is expected, and decodes JSON only when asked.
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::rest::{Filters, ResourceKind};
//!
//! let raw = client
//!     .get_raw(ResourceKind::Message, Some(&ns), "m1", &Filters::new().with("extra", "raw"))
//!     .await?;
//! std::fs::write("message.eml", &*raw)?;
//! ```
//!
//! [`RestClient::get_raw`]: crate::clients::RestClient::get_raw

use std::ops::Deref;

use crate::clients::{DecodeError, HttpResponse};

/// A successful response with an undecoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl RawResponse {
    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the body bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response and returns the body bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, DecodeError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            DecodeError::new(e.to_string(), String::from_utf8_lossy(&self.body))
        })
    }
}

impl From<HttpResponse> for RawResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.code,
            content_type: response.content_type().map(String::from),
            body: response.body,
        }
    }
}

impl Deref for RawResponse {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(content_type: &str, body: &[u8]) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec![content_type.to_string()]);
        HttpResponse::new(200, headers, body.to_vec())
    }

    #[test]
    fn test_raw_response_keeps_bytes_and_content_type() {
        let raw = RawResponse::from(response("message/rfc822", b"From: a@b.c\r\n"));

        assert_eq!(raw.status(), 200);
        assert_eq!(raw.content_type(), Some("message/rfc822"));
        assert_eq!(raw.bytes(), b"From: a@b.c\r\n");
        assert_eq!(raw.len(), 13);
    }

    #[test]
    fn test_raw_response_json_decodes_on_demand() {
        let raw = RawResponse::from(response("application/json", br#"{"id":"m1"}"#));
        assert_eq!(raw.json().unwrap()["id"], "m1");

        let raw = RawResponse::from(response("text/plain", b"not json"));
        let error = raw.json().unwrap_err();
        assert_eq!(error.body, "not json");
    }
}
