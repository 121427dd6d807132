//! Content signatures for change detection
//!
//! The signature covers an object's content only: identity fields (`_id`,
//! `_rev`, `id`) are removed first, so the same content stored under a new
//! revision hashes identically. It is a 32-bit rolling hash, not a digest;
//! collisions are expected.

use modelshift_core::IDENTITY_FIELDS;
use serde_json::Value;

/// Hash an object's content, ignoring identity fields
///
/// The value is serialised to compact JSON and every UTF-16 code unit is
/// folded into `h = h * 31 + unit` with wrapping 32-bit arithmetic. Object
/// keys serialise in insertion order, so `{"b":1,"a":2}` and `{"a":2,"b":1}`
/// hash differently.
///
/// ```
/// use modelshift_util::content_hash;
/// use serde_json::json;
///
/// assert_eq!(content_hash(&json!({"a": 1, "_id": "x"})), content_hash(&json!({"a": 1})));
/// ```
pub fn content_hash(value: &Value) -> i32 {
    let mut plain = value.clone();
    if let Value::Object(map) = &mut plain {
        for field in IDENTITY_FIELDS {
            map.shift_remove(field);
        }
    }
    string_hash(&plain.to_string())
}

/// Hash an optional value; `None` hashes like an empty object
pub fn content_hash_opt(value: Option<&Value>) -> i32 {
    match value {
        Some(value) => content_hash(value),
        None => content_hash(&Value::Object(Default::default())),
    }
}

/// Rolling 31-multiplier hash over UTF-16 code units
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
