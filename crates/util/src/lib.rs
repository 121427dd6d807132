//! Stateless helpers for model objects
//!
//! - allocate_name: collision-free labels
//! - merge_defaults: backfill declared fields from an old instance
//! - content_hash: change-detection signature ignoring identity fields
//! - IdGenerator: prefixed, time-stamped ids
//! - JsonSource: accept JSON as text or as a decoded value

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defaults;
pub mod hash;
pub mod id;
pub mod json;
pub mod names;

pub use defaults::merge_defaults;
pub use hash::{content_hash, content_hash_opt, string_hash};
pub use id::{generate_id, IdGenerator, DEFAULT_ID_PREFIX};
pub use json::JsonSource;
pub use names::allocate_name;
