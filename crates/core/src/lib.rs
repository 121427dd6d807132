//! Core types for modelshift
//!
//! This crate defines the foundational types used throughout the system:
//! - Version: semantic model version with an explicit unknown sentinel
//! - ModelVersions: current target versions for persisted and local objects
//! - ModelObject: JSON object carrying an optional `modelVersion`
//! - MigrationConfig: `modelshift.toml` configuration
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod object;
pub mod version;
pub mod versions;

pub use config::{MigrationConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use object::{json_kind, ModelObject, IDENTITY_FIELDS, MODEL_VERSION_FIELD};
pub use version::{Version, MODEL_VERSION};
pub use versions::ModelVersions;
