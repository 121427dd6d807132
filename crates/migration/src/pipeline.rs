//! Version-driven conversion of model objects
//!
//! For each object, in input order:
//!
//! 1. Detect the version from its `modelVersion` field (absent → unknown).
//!    An unreadable field is recorded as a warning against that object.
//! 2. Ask the resolver once for the converter chain for that version.
//! 3. Fold the chain over the object, feeding each output to the next step.
//!    A step returning `None` rejects the object and skips the rest of its
//!    chain.
//!
//! Survivors keep their relative order. Each object is resolved
//! independently, so one batch may run different chains for different
//! objects.

use crate::report::{MigrationReport, MigrationWarning, Rejection};
use crate::resolver::ConverterResolver;
use modelshift_core::{Error, ModelObject, Version};

/// Input to [`convert`]: one object or a batch
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    /// A single object
    One(ModelObject),
    /// An ordered batch
    Many(Vec<ModelObject>),
}

impl From<ModelObject> for ModelInput {
    fn from(object: ModelObject) -> Self {
        ModelInput::One(object)
    }
}

impl From<Vec<ModelObject>> for ModelInput {
    fn from(objects: Vec<ModelObject>) -> Self {
        ModelInput::Many(objects)
    }
}

/// Output of [`convert`], mirroring the shape of the input
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// Result for a single object; `None` if it was rejected
    One(Option<ModelObject>),
    /// Surviving objects of a batch
    Many(Vec<ModelObject>),
}

impl ModelOutput {
    /// The single-object result, if this is one
    pub fn into_one(self) -> Option<ModelObject> {
        match self {
            ModelOutput::One(object) => object,
            ModelOutput::Many(_) => None,
        }
    }

    /// The batch result, if this is one
    pub fn into_many(self) -> Option<Vec<ModelObject>> {
        match self {
            ModelOutput::Many(objects) => Some(objects),
            ModelOutput::One(_) => None,
        }
    }
}

/// Runs converter chains chosen by a resolver
#[derive(Debug)]
pub struct MigrationPipeline<'r, R: ?Sized> {
    resolver: &'r R,
}

impl<'r, R: ?Sized> MigrationPipeline<'r, R> {
    /// Create a pipeline borrowing `resolver`
    pub fn new(resolver: &'r R) -> Self {
        Self { resolver }
    }

    /// Convert a single object
    ///
    /// Returns `None` if a converter rejected it.
    pub fn convert_one<O: ?Sized>(&self, object: ModelObject, options: &O) -> Option<ModelObject>
    where
        R: ConverterResolver<O>,
    {
        let mut report = MigrationReport::default();
        self.migrate_object(0, object, options, &mut report)
    }

    /// Convert a batch, dropping rejected objects
    pub fn convert_many<O: ?Sized>(&self, objects: Vec<ModelObject>, options: &O) -> Vec<ModelObject>
    where
        R: ConverterResolver<O>,
    {
        self.migrate(objects, options).into_objects()
    }

    /// Convert a batch and report what was dropped and why
    pub fn migrate<O: ?Sized>(&self, objects: Vec<ModelObject>, options: &O) -> MigrationReport
    where
        R: ConverterResolver<O>,
    {
        let mut report = MigrationReport {
            objects: Vec::with_capacity(objects.len()),
            ..MigrationReport::default()
        };
        for (index, object) in objects.into_iter().enumerate() {
            if let Some(converted) = self.migrate_object(index, object, options, &mut report) {
                report.objects.push(converted);
            }
        }
        tracing::debug!(
            kept = report.objects.len(),
            rejected = report.rejections.len(),
            warnings = report.warnings.len(),
            "migration finished"
        );
        report
    }

    fn migrate_object<O: ?Sized>(
        &self,
        index: usize,
        object: ModelObject,
        options: &O,
        report: &mut MigrationReport,
    ) -> Option<ModelObject>
    where
        R: ConverterResolver<O>,
    {
        let version = match object.try_version() {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(
                    index,
                    error = %e,
                    "unreadable model version, treating object as unversioned"
                );
                report.warnings.push(match e {
                    Error::InvalidVersionType(found) => {
                        MigrationWarning::InvalidVersionType { index, found }
                    }
                    other => MigrationWarning::MalformedVersion {
                        index,
                        message: other.to_string(),
                    },
                });
                Version::UNKNOWN
            }
        };

        let chain = self.resolver.resolve(&version);
        tracing::debug!(index, %version, steps = chain.len(), "converting object");

        let mut current = object;
        for step in &chain {
            match step.convert(current, options) {
                Some(next) => current = next,
                None => {
                    tracing::debug!(index, %version, converter = step.name(), "object rejected");
                    report.rejections.push(Rejection {
                        index,
                        version,
                        converter: step.name().to_string(),
                    });
                    return None;
                }
            }
        }
        Some(current)
    }
}

/// Convert one object or a batch, preserving the call shape
///
/// Missing input or a missing resolver is a no-op: the input is returned
/// unchanged (a single object as `ModelOutput::One(Some(_))`).
pub fn convert<O, R>(input: Option<ModelInput>, resolver: Option<&R>, options: &O) -> Option<ModelOutput>
where
    O: ?Sized,
    R: ConverterResolver<O> + ?Sized,
{
    let input = input?;
    let Some(resolver) = resolver else {
        return Some(match input {
            ModelInput::One(object) => ModelOutput::One(Some(object)),
            ModelInput::Many(objects) => ModelOutput::Many(objects),
        });
    };
    let pipeline = MigrationPipeline::new(resolver);
    Some(match input {
        ModelInput::One(object) => ModelOutput::One(pipeline.convert_one(object, options)),
        ModelInput::Many(objects) => ModelOutput::Many(pipeline.convert_many(objects, options)),
    })
}
