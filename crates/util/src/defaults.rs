//! Backfill fields from a previous instance
//!
//! When a model object is rebuilt from partial properties, fields the caller
//! did not set are taken from the old instance. Only fields the model
//! declares are copied.

use modelshift_core::ModelObject;

/// Copy declared fields from `source` that `target` does not define
///
/// A field counts as defined when the key is present, even if its value is
/// `null`, `0` or `false`. Returns `target` unchanged when `source` or
/// `fields` is `None`.
///
/// ```
/// use modelshift_core::ModelObject;
/// use modelshift_util::merge_defaults;
/// use serde_json::json;
///
/// let mut target = ModelObject::new();
/// let source = ModelObject::try_from(json!({"a": 1, "b": 2})).unwrap();
/// merge_defaults(&mut target, Some(&source), Some(&["a"][..]));
/// assert_eq!(target.into_value(), json!({"a": 1}));
/// ```
pub fn merge_defaults<'a, S: AsRef<str>>(
    target: &'a mut ModelObject,
    source: Option<&ModelObject>,
    fields: Option<&[S]>,
) -> &'a mut ModelObject {
    let (Some(source), Some(fields)) = (source, fields) else {
        return target;
    };
    for (key, value) in source.iter() {
        let declared = fields.iter().any(|f| f.as_ref() == key.as_str());
        if declared && !target.contains_key(key) {
            tracing::trace!(field = %key, "filled default from previous instance");
            target.insert(key.clone(), value.clone());
        }
    }
    target
}
