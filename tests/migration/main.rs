//! Integration tests for the migration engine.

#[path = "../common/mod.rs"]
mod common;

mod helpers;
mod pipeline_scenarios;
