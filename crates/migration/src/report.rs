//! Migration outcomes

use modelshift_core::{ModelObject, Version};
use serde::Serialize;

/// An object dropped by a converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Position of the object in the input
    pub index: usize,
    /// Version the object was detected at
    pub version: Version,
    /// Name of the converter that rejected it
    pub converter: String,
}

/// Non-fatal problem attributed to one object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MigrationWarning {
    /// `modelVersion` was not valid JSON; the object was treated as unknown
    MalformedVersion {
        /// Position of the object in the input
        index: usize,
        /// Decode failure
        message: String,
    },
    /// `modelVersion` was neither a string nor a version record; the object
    /// was treated as unknown
    InvalidVersionType {
        /// Position of the object in the input
        index: usize,
        /// JSON kind found instead
        found: String,
    },
}

impl MigrationWarning {
    /// Position of the affected object in the input
    pub fn index(&self) -> usize {
        match self {
            MigrationWarning::MalformedVersion { index, .. }
            | MigrationWarning::InvalidVersionType { index, .. } => *index,
        }
    }
}

/// Result of migrating a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationReport {
    /// Surviving objects, in input order
    pub objects: Vec<ModelObject>,
    /// Objects dropped by a converter
    pub rejections: Vec<Rejection>,
    /// Per-object problems that did not stop conversion
    pub warnings: Vec<MigrationWarning>,
}

impl MigrationReport {
    /// Surviving objects
    pub fn into_objects(self) -> Vec<ModelObject> {
        self.objects
    }

    /// Number of objects that entered the pipeline
    pub fn input_len(&self) -> usize {
        self.objects.len() + self.rejections.len()
    }

    /// Check if every object survived without warnings
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty() && self.warnings.is_empty()
    }
}
