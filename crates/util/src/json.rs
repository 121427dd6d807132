//! JSON pass-through parsing
//!
//! Stored objects sometimes arrive as JSON text and sometimes already
//! decoded. [`JsonSource`] accepts either and yields a decoded value.

use modelshift_core::{ModelObject, Result};
use serde_json::Value;

/// JSON that may still need decoding
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Encoded JSON text
    Text(String),
    /// Already decoded value
    Value(Value),
}

impl JsonSource {
    /// Decode text, or pass a value through unchanged
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the text is not valid JSON.
    pub fn into_value(self) -> Result<Value> {
        match self {
            JsonSource::Text(text) => Ok(serde_json::from_str(&text)?),
            JsonSource::Value(value) => Ok(value),
        }
    }

    /// Decode into a model object
    ///
    /// # Errors
    ///
    /// Fails if the text is not valid JSON or the value is not an object.
    pub fn into_object(self) -> Result<ModelObject> {
        ModelObject::try_from(self.into_value()?)
    }
}

impl From<&str> for JsonSource {
    fn from(text: &str) -> Self {
        JsonSource::Text(text.to_string())
    }
}

impl From<String> for JsonSource {
    fn from(text: String) -> Self {
        JsonSource::Text(text)
    }
}

impl From<Value> for JsonSource {
    fn from(value: Value) -> Self {
        JsonSource::Value(value)
    }
}

impl From<ModelObject> for JsonSource {
    fn from(object: ModelObject) -> Self {
        JsonSource::Value(object.into_value())
    }
}
