//! Migration pipeline for versioned model objects
//!
//! - Converter: one conversion step, `None` rejects the object
//! - ConverterResolver: version → ordered converter chain, supplied by the host
//! - ConverterRegistry: resolver keyed by version ranges
//! - MigrationPipeline: folds resolved chains over single objects or batches

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod converter;
pub mod pipeline;
pub mod report;
pub mod resolver;

pub use converter::{converter, Converter, ConverterChain, NamedConverter};
pub use pipeline::{convert, MigrationPipeline, ModelInput, ModelOutput};
pub use report::{MigrationReport, MigrationWarning, Rejection};
pub use resolver::{ConverterRegistry, ConverterResolver, VersionRange};
