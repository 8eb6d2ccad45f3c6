//! Write payloads for create and update.
//!
//! A [`Payload`] is encoded according to the target kind's
//! [`body_encoding`](crate::rest::ResourceKind::body_encoding): JSON kinds take
//! a JSON document, multipart kinds (files) take an upload and optional text
//! fields.

use serde_json::Value;

use crate::clients::{DataType, InvalidHttpRequestError, MultipartPart, RequestBody};
use crate::rest::ResourceKind;

/// Multipart field name of an uploaded file.
pub const FILE_FIELD: &str = "file";

/// A file to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the server.
    pub filename: String,
    /// MIME type of the content, if known.
    pub content_type: Option<String>,
    /// File content.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload without a content type.
    #[must_use]
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

// Content can be large; show only its size.
impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Data sent by `create` and `update`.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// A JSON document.
    Json(Value),
    /// A file upload.
    Upload(FileUpload),
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<FileUpload> for Payload {
    fn from(upload: FileUpload) -> Self {
        Self::Upload(upload)
    }
}

impl Payload {
    /// Encodes the payload for `kind`.
    ///
    /// For multipart kinds a JSON object becomes text parts: strings are sent
    /// verbatim, other values JSON-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnsupportedPayload`] for an upload
    /// to a JSON kind, or a non-object JSON document for a multipart kind.
    pub fn into_body(self, kind: ResourceKind) -> Result<RequestBody, InvalidHttpRequestError> {
        match (kind.body_encoding(), self) {
            (DataType::Multipart, Self::Upload(upload)) => {
                Ok(RequestBody::Multipart(vec![MultipartPart::File {
                    name: FILE_FIELD.to_string(),
                    filename: upload.filename,
                    content_type: upload.content_type,
                    bytes: upload.bytes,
                }]))
            }
            (DataType::Multipart, Self::Json(Value::Object(fields))) => {
                let parts = fields
                    .into_iter()
                    .map(|(name, value)| {
                        let value = match value {
                            Value::String(s) => s,
                            other => other.to_string(),
                        };
                        MultipartPart::Text { name, value }
                    })
                    .collect();
                Ok(RequestBody::Multipart(parts))
            }
            (DataType::Multipart, Self::Json(_)) => {
                Err(InvalidHttpRequestError::UnsupportedPayload {
                    resource: kind.collection_name(),
                    reason: "multipart fields must be a JSON object",
                })
            }
            (_, Self::Json(value)) => Ok(RequestBody::Json(value)),
            (_, Self::Upload(_)) => Err(InvalidHttpRequestError::UnsupportedPayload {
                resource: kind.collection_name(),
                reason: "file uploads are only accepted by multipart resources",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_to_files_becomes_file_part() {
        let upload = FileUpload::new("a.txt", b"hello".to_vec()).with_content_type("text/plain");
        let body = Payload::Upload(upload).into_body(ResourceKind::File).unwrap();

        assert_eq!(
            body,
            RequestBody::Multipart(vec![MultipartPart::File {
                name: "file".to_string(),
                filename: "a.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                bytes: b"hello".to_vec(),
            }])
        );
    }

    #[test]
    fn test_json_object_to_files_becomes_text_parts() {
        let body = Payload::Json(json!({"filename": "b.txt", "size": 3}))
            .into_body(ResourceKind::File)
            .unwrap();

        let RequestBody::Multipart(parts) = body else {
            panic!("expected multipart body");
        };
        assert!(parts.contains(&MultipartPart::Text {
            name: "filename".to_string(),
            value: "b.txt".to_string(),
        }));
        assert!(parts.contains(&MultipartPart::Text {
            name: "size".to_string(),
            value: "3".to_string(),
        }));
    }

    #[test]
    fn test_json_to_other_kinds_stays_json() {
        let body = Payload::Json(json!({"name": "todo"}))
            .into_body(ResourceKind::Tag)
            .unwrap();
        assert_eq!(body.data_type(), DataType::Json);
    }

    #[test]
    fn test_upload_to_json_kind_is_rejected() {
        let result = Payload::Upload(FileUpload::new("a", vec![1]))
            .into_body(ResourceKind::Message);
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnsupportedPayload { resource: "messages", .. })
        ));
    }

    #[test]
    fn test_upload_debug_hides_content() {
        let upload = FileUpload::new("a.bin", vec![0u8; 4]);
        let debug = format!("{upload:?}");
        assert!(debug.contains("len: 4"));
        assert!(!debug.contains("bytes"));
    }
}
