//! Semantic model versions and their wire form
//!
//! Every persisted model object may carry a `modelVersion` field holding a
//! JSON-encoded version record:
//!
//! ```text
//! {"major":1,"minor":2,"patch":3}
//! ```
//!
//! Objects written before versioning existed carry no such field. They are
//! represented by [`Version::Unknown`], which serialises with all three
//! components set to `null`.
//!
//! ## Ordering
//!
//! `Unknown` sorts before every semantic version. Semantic versions compare
//! by major, then minor, then patch.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Version string of the current model schema.
///
/// Used as the default target for both persisted and local objects.
pub const MODEL_VERSION: &str = r#"{"major":1,"minor":0,"patch":0}"#;

/// Version of a model object's schema
///
/// ## Invariants
///
/// - Either all three components are known or none is; there is no partial
///   state.
/// - A version returned by [`Version::parse`] never has `major == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// No version recorded (legacy or unversioned object)
    #[default]
    Unknown,

    /// A concrete `major.minor.patch` version
    Semantic {
        /// Major component
        major: u32,
        /// Minor component
        minor: u32,
        /// Patch component
        patch: u32,
    },
}

/// Wire representation of a version record
#[derive(Serialize)]
struct VersionRecord {
    major: Option<u32>,
    minor: Option<u32>,
    patch: Option<u32>,
}

impl Version {
    /// The unknown-version sentinel
    pub const UNKNOWN: Version = Version::Unknown;

    /// Create a semantic version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version::Semantic {
            major,
            minor,
            patch,
        }
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parse a version string
    ///
    /// - `None` or `""` yields [`Version::UNKNOWN`].
    /// - Text that is not valid JSON is a caller error
    ///   ([`Error::MalformedVersion`]).
    /// - Valid JSON that is not an object, or whose `major` is missing or
    ///   zero-like, yields [`Version::UNKNOWN`].
    ///
    /// Components are coerced to integers: numbers are truncated and strings
    /// are read up to their first non-digit. A `major` outside `1..=u32::MAX`
    /// yields [`Version::UNKNOWN`]; a missing or out-of-range `minor`/`patch`
    /// becomes 0.
    ///
    /// Note that an explicit `major: 0` is indistinguishable from an
    /// unversioned object. Objects stamped `0.x.y` therefore run the same
    /// conversion chain as legacy objects.
    pub fn parse(input: Option<&str>) -> Result<Version> {
        let input = match input {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(Version::UNKNOWN),
        };
        let value: Value =
            serde_json::from_str(input).map_err(|source| Error::MalformedVersion {
                input: input.to_string(),
                source,
            })?;
        Ok(Self::from_json(&value))
    }

    /// Parse a version string, treating malformed JSON as unknown
    pub fn parse_lenient(input: Option<&str>) -> Version {
        match Self::parse(input) {
            Ok(version) => version,
            Err(e) => {
                tracing::debug!(error = %e, "treating malformed version string as unknown");
                Version::UNKNOWN
            }
        }
    }

    /// Interpret an already decoded version record
    pub fn from_json(value: &Value) -> Version {
        let Some(fields) = value.as_object() else {
            return Version::UNKNOWN;
        };
        let read = |name: &str| {
            fields
                .get(name)
                .and_then(coerce_int)
                .and_then(|n| u32::try_from(n).ok())
        };
        let major = match read("major") {
            Some(m) if m > 0 => m,
            _ => return Version::UNKNOWN,
        };
        Version::new(
            major,
            read("minor").unwrap_or(0),
            read("patch").unwrap_or(0),
        )
    }

    /// Encode as a version string
    pub fn to_version_string(&self) -> String {
        let record = self.record();
        // A record of three optional integers always serialises.
        serde_json::to_string(&record).unwrap_or_default()
    }

    fn record(&self) -> VersionRecord {
        VersionRecord {
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Major component, `None` for the sentinel
    #[inline]
    pub const fn major(&self) -> Option<u32> {
        match self {
            Version::Semantic { major, .. } => Some(*major),
            Version::Unknown => None,
        }
    }

    /// Minor component, `None` for the sentinel
    #[inline]
    pub const fn minor(&self) -> Option<u32> {
        match self {
            Version::Semantic { minor, .. } => Some(*minor),
            Version::Unknown => None,
        }
    }

    /// Patch component, `None` for the sentinel
    #[inline]
    pub const fn patch(&self) -> Option<u32> {
        match self {
            Version::Semantic { patch, .. } => Some(*patch),
            Version::Unknown => None,
        }
    }

    /// Check if this is the unknown sentinel
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Version::Unknown)
    }
}

/// `parseInt`-style integer coercion of a JSON value
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
        Value::String(s) => leading_int(s),
        _ => None,
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Semantic {
                major,
                minor,
                patch,
            } => write!(f, "{}.{}.{}", major, minor, patch),
            Version::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(Some(s))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Version::from_json(&value))
    }
}

// ============================================================================
// Tests
// ============================================================================
