//! Conversion functions
//!
//! A converter moves one object a step towards the current schema. It either
//! returns the (possibly replaced) object or `None` to reject it, for example
//! when content cannot be decrypted. Rejection is an outcome, not an error:
//! the pipeline drops the object and carries on with the rest of the batch.

use modelshift_core::ModelObject;
use std::fmt;
use std::sync::Arc;

/// A single conversion step
///
/// Implemented for every `Fn(ModelObject, &O) -> Option<ModelObject>`, so
/// plain closures can be used directly. `O` is the caller's options type,
/// passed unchanged to every step.
pub trait Converter<O: ?Sized>: Send + Sync {
    /// Convert `object`, or return `None` to reject it.
    fn convert(&self, object: ModelObject, options: &O) -> Option<ModelObject>;

    /// Name used in logs and rejection reports
    fn name(&self) -> &str {
        "converter"
    }
}

impl<O: ?Sized, F> Converter<O> for F
where
    F: Fn(ModelObject, &O) -> Option<ModelObject> + Send + Sync,
{
    fn convert(&self, object: ModelObject, options: &O) -> Option<ModelObject> {
        self(object, options)
    }

    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }
}

/// Ordered list of converters to fold over an object
pub type ConverterChain<O> = Vec<Arc<dyn Converter<O>>>;

/// Wrap a closure as a shareable converter
pub fn converter<O, F>(f: F) -> Arc<dyn Converter<O>>
where
    O: ?Sized + 'static,
    F: Fn(ModelObject, &O) -> Option<ModelObject> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Converter with an explicit name
///
/// Closure type names are unreadable in logs; wrap them to report
/// something like `"split-label-v2"` instead.
pub struct NamedConverter<F> {
    name: String,
    f: F,
}

impl<F> NamedConverter<F> {
    /// Create a named converter
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Wrap into a shareable converter
    pub fn shared<O>(self) -> Arc<dyn Converter<O>>
    where
        O: ?Sized + 'static,
        F: Fn(ModelObject, &O) -> Option<ModelObject> + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<O: ?Sized, F> Converter<O> for NamedConverter<F>
where
    F: Fn(ModelObject, &O) -> Option<ModelObject> + Send + Sync,
{
    fn convert(&self, object: ModelObject, options: &O) -> Option<ModelObject> {
        (self.f)(object, options)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for NamedConverter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedConverter")
            .field("name", &self.name)
            .finish()
    }
}
