//! modelshift - versioned-object migration for JSON model objects
//!
//! Persisted model objects carry a `modelVersion` field. On load, modelshift
//! detects each object's version, asks the host for the converters that
//! version needs, and folds them over the object. Converters may reject an
//! object, which drops it from the result.
//!
//! # Quick Start
//!
//! ```
//! use modelshift::{ConverterRegistry, MigrationPipeline, ModelObject, Version, VersionRange};
//! use serde_json::json;
//!
//! let mut registry = ConverterRegistry::<()>::new();
//! registry.register(
//!     VersionRange::Below(Version::new(2, 0, 0)),
//!     |mut o: ModelObject, _: &()| {
//!         o.set_version(&Version::new(2, 0, 0));
//!         Some(o)
//!     },
//! );
//!
//! let legacy = ModelObject::try_from(json!({"label": "home"})).unwrap();
//! let upgraded = MigrationPipeline::new(&registry).convert_one(legacy, &()).unwrap();
//! assert_eq!(upgraded.version(), Version::new(2, 0, 0));
//! ```
//!
//! # Architecture
//!
//! - `modelshift-core`: versions, target versions, model objects, config
//! - `modelshift-migration`: converters, resolvers, the pipeline
//! - `modelshift-util`: name allocation, default filling, hashing, ids

pub use modelshift_core::*;
pub use modelshift_migration::*;
pub use modelshift_util::*;
