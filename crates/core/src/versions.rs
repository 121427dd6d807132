//! Current target versions
//!
//! [`ModelVersions`] holds the two versions migrated objects must reach:
//! one for persisted (synced) storage and one for local-only storage. It is
//! built once at startup and handed by reference to whatever needs it.

use crate::error::{Error, Result};
use crate::version::{Version, MODEL_VERSION};

/// Target versions for persisted and local objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVersions {
    version_string: String,
    persisted: Version,
    local: Version,
}

impl ModelVersions {
    /// Build from the compiled-in [`MODEL_VERSION`]
    ///
    /// # Errors
    ///
    /// Fails only if [`MODEL_VERSION`] itself is invalid.
    pub fn current() -> Result<Self> {
        Self::from_version_string(MODEL_VERSION)
    }

    /// Build both targets from a single version string
    ///
    /// Parsing is strict: the string must decode to a concrete version.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedVersion`] if the string is not JSON,
    /// [`Error::InvalidTargetVersion`] if it decodes to the unknown sentinel.
    pub fn from_version_string(version_string: &str) -> Result<Self> {
        let persisted = parse_target(version_string)?;
        let local = parse_target(version_string)?;
        tracing::debug!(%persisted, %local, "model versions initialised");
        Ok(Self {
            version_string: version_string.to_string(),
            persisted,
            local,
        })
    }

    /// Replace the local target with a separately configured version
    ///
    /// # Errors
    ///
    /// Same as [`ModelVersions::from_version_string`].
    pub fn with_local(mut self, local_version_string: &str) -> Result<Self> {
        self.local = parse_target(local_version_string)?;
        Ok(self)
    }

    /// The version string these targets were built from
    pub fn model_version_string(&self) -> &str {
        &self.version_string
    }

    /// Target version for persisted objects
    #[inline]
    pub fn latest_persisted(&self) -> Version {
        self.persisted
    }

    /// Target version for local-only objects
    #[inline]
    pub fn latest_local(&self) -> Version {
        self.local
    }

    /// Whether `version` equals the persisted target
    pub fn is_current(&self, version: &Version) -> bool {
        *version == self.persisted
    }

    /// Whether `version` equals the local target
    pub fn is_current_local(&self, version: &Version) -> bool {
        *version == self.local
    }

    /// Whether an object at `version` is behind the persisted target
    pub fn needs_upgrade(&self, version: &Version) -> bool {
        *version < self.persisted
    }
}

fn parse_target(version_string: &str) -> Result<Version> {
    let version = Version::parse(Some(version_string))?;
    if version.is_unknown() {
        return Err(Error::InvalidTargetVersion(format!(
            "'{}' does not name a concrete version",
            version_string
        )));
    }
    Ok(version)
}
