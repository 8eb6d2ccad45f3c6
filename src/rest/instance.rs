//! Resource instances and the factory that builds them.
//!
//! A [`ResourceInstance`] is the decoded JSON object of one resource, tagged
//! with its [`ResourceKind`] and the namespace it was fetched from. Instances
//! are plain values: every fetch builds fresh ones through [`make_instance`],
//! and nothing updates an instance in place.
//!
//! # Example
//!
//! ```rust
//! use nylas_api::rest::{make_instance, ResourceKind};
//! use nylas_api::rest::resources::Tag;
//! use serde_json::json;
//!
//! let fields = json!({"id": "t1", "name": "inbox"});
//! let instance = make_instance(ResourceKind::Tag, None, fields.as_object().unwrap().clone());
//!
//! assert_eq!(instance.id(), Some("t1"));
//! let tag: Tag = instance.parse().unwrap();
//! assert_eq!(tag.name.as_deref(), Some("inbox"));
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clients::DecodeError;
use crate::config::NamespaceId;
use crate::rest::ResourceKind;

/// One decoded resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceInstance {
    kind: ResourceKind,
    namespace: Option<NamespaceId>,
    fields: Map<String, Value>,
}

/// Builds a resource instance from decoded fields.
///
/// This is a pure function. Fields the kind does not declare are kept as-is.
#[must_use]
pub fn make_instance(
    kind: ResourceKind,
    namespace: Option<NamespaceId>,
    fields: Map<String, Value>,
) -> ResourceInstance {
    ResourceInstance {
        kind,
        namespace,
        fields,
    }
}

impl ResourceInstance {
    /// Returns the resource kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the namespace the instance was fetched from.
    #[must_use]
    pub const fn namespace(&self) -> Option<&NamespaceId> {
        self.namespace.as_ref()
    }

    /// Returns the `id` field if it is a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns all fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the instance and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Returns the names of fields the kind does not declare, sorted.
    #[must_use]
    pub fn undeclared_fields(&self) -> Vec<&str> {
        let mut undeclared: Vec<&str> = self
            .fields
            .keys()
            .map(String::as_str)
            .filter(|field| !self.kind.declares(field))
            .collect();
        undeclared.sort_unstable();
        undeclared
    }

    /// Deserializes the instance into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the fields do not match the model's shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        let undeclared = self.undeclared_fields();
        if !undeclared.is_empty() {
            tracing::warn!(
                kind = %self.kind,
                fields = ?undeclared,
                "instance has undeclared fields"
            );
        }

        let value = Value::Object(self.fields.clone());
        serde_json::from_value(value).map_err(|e| {
            DecodeError::new(
                format!("{} does not match the {} model: {e}", self.kind, self.kind.name()),
                Value::Object(self.fields.clone()).to_string(),
            )
        })
    }
}

/// Decodes a JSON object body into an instance.
pub(crate) fn instance_from_value(
    kind: ResourceKind,
    namespace: Option<&NamespaceId>,
    value: Value,
) -> Result<ResourceInstance, DecodeError> {
    match value {
        Value::Object(fields) => Ok(make_instance(kind, namespace.cloned(), fields)),
        other => Err(DecodeError::new(
            format!("expected a JSON object for {kind}"),
            other.to_string(),
        )),
    }
}

/// Decodes a JSON array body into instances.
///
/// Every element must be an object.
pub(crate) fn instances_from_value(
    kind: ResourceKind,
    namespace: Option<&NamespaceId>,
    value: Value,
) -> Result<Vec<ResourceInstance>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(DecodeError::new(
            format!("expected a JSON array of {kind}"),
            value.to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| instance_from_value(kind, namespace, item))
        .collect()
}
