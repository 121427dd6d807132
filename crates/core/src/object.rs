//! Model objects
//!
//! A model object is any JSON object. Two groups of fields have meaning to
//! this crate:
//!
//! - `modelVersion`: the version string the object was last written at
//! - `_id`, `_rev`, `id`: identity fields, ignored for content comparison

use crate::error::{Error, Result};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// Field holding the object's version string
pub const MODEL_VERSION_FIELD: &str = "modelVersion";

/// Fields carrying storage identity rather than content
pub const IDENTITY_FIELDS: [&str; 3] = ["_rev", "_id", "id"];

/// JSON object wrapper
///
/// Newtype around `serde_json::Map` so that only objects (never arrays or
/// scalars) flow through conversion chains. Derefs to the map for field
/// access.
///
/// # Examples
///
/// ```
/// use modelshift_core::{ModelObject, Version};
/// use serde_json::json;
///
/// let mut obj = ModelObject::try_from(json!({"label": "home"})).unwrap();
/// assert_eq!(obj.version(), Version::UNKNOWN);
///
/// obj.set_version(&Version::new(2, 0, 0));
/// assert_eq!(obj.version(), Version::new(2, 0, 0));
/// assert_eq!(obj["label"], "home");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ModelObject(Map<String, Value>);

impl ModelObject {
    /// Create an empty object
    pub fn new() -> Self {
        ModelObject(Map::new())
    }

    /// Get the underlying map
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Convert into a `serde_json::Value::Object`
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Raw `modelVersion` string, if present and a string
    pub fn model_version_str(&self) -> Option<&str> {
        self.0.get(MODEL_VERSION_FIELD).and_then(Value::as_str)
    }

    /// Read the recorded version strictly
    ///
    /// An absent or `null` field is [`Version::UNKNOWN`]. A string is parsed
    /// as a version string; an object is read as an already decoded version
    /// record.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedVersion`] if a string field is not JSON
    /// - [`Error::InvalidVersionType`] for any other kind of value
    pub fn try_version(&self) -> Result<Version> {
        match self.0.get(MODEL_VERSION_FIELD) {
            None | Some(Value::Null) => Ok(Version::UNKNOWN),
            Some(Value::String(s)) => Version::parse(Some(s.as_str())),
            Some(record @ Value::Object(_)) => Ok(Version::from_json(record)),
            Some(other) => Err(Error::InvalidVersionType(json_kind(other).to_string())),
        }
    }

    /// Recorded version, or [`Version::UNKNOWN`] if absent or unreadable
    pub fn version(&self) -> Version {
        self.try_version().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "treating unreadable model version as unknown");
            Version::UNKNOWN
        })
    }

    /// Stamp the object with `version`
    pub fn set_version(&mut self, version: &Version) {
        self.0.insert(
            MODEL_VERSION_FIELD.to_string(),
            Value::String(version.to_version_string()),
        );
    }

    /// Stamp the object with a raw version string
    pub fn set_model_version_str(&mut self, version_string: impl Into<String>) {
        self.0.insert(
            MODEL_VERSION_FIELD.to_string(),
            Value::String(version_string.into()),
        );
    }

    /// Remove identity fields, returning the object
    pub fn strip_identity(mut self) -> Self {
        for field in IDENTITY_FIELDS {
            self.0.shift_remove(field);
        }
        self
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl Deref for ModelObject {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ModelObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for ModelObject {
    fn from(map: Map<String, Value>) -> Self {
        ModelObject(map)
    }
}

impl From<ModelObject> for Value {
    fn from(obj: ModelObject) -> Self {
        obj.into_value()
    }
}

impl TryFrom<Value> for ModelObject {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(ModelObject(map)),
            other => Err(Error::NotAnObject(json_kind(&other).to_string())),
        }
    }
}

/// Name of a JSON value's kind, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
