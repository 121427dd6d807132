//! Opaque object ids
//!
//! Ids have the form `{prefix}-{unix_millis}-{counter}`. They are unique
//! within a process; across processes the millisecond timestamp makes
//! collisions unlikely but not impossible.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix used when none is given
pub const DEFAULT_ID_PREFIX: &str = "id";

const FIRST_COUNTER: u64 = 100;

static GLOBAL_IDS: IdGenerator = IdGenerator::new();

/// Generates prefixed, time-stamped ids
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose counter starts at 100
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(FIRST_COUNTER),
        }
    }

    /// Generate an id, defaulting the prefix to `"id"`
    pub fn generate(&self, prefix: Option<&str>) -> String {
        let prefix = match prefix {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_ID_PREFIX,
        };
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), n)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an id from the process-wide generator
pub fn generate_id(prefix: Option<&str>) -> String {
    GLOBAL_IDS.generate(prefix)
}
