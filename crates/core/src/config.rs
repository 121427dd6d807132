//! Migration configuration via `modelshift.toml`
//!
//! The configuration names the schema versions migrated objects must reach.
//! It is read once at startup and turned into [`ModelVersions`]; an invalid
//! target version stops startup.

use crate::error::{Error, Result};
use crate::version::MODEL_VERSION;
use crate::versions::ModelVersions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "modelshift.toml";

/// Migration configuration loaded from `modelshift.toml`.
///
/// # Example
///
/// ```toml
/// model_version = '{"major":1,"minor":0,"patch":0}'
/// # model_version_local = '{"major":1,"minor":0,"patch":0}'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Target version string for persisted objects (and local objects,
    /// unless overridden).
    #[serde(default = "default_model_version")]
    pub model_version: String,
    /// Separate target for local-only objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version_local: Option<String>,
}

fn default_model_version() -> String {
    MODEL_VERSION.to_string()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            model_version: default_model_version(),
            model_version_local: None,
        }
    }
}

impl MigrationConfig {
    /// Build the target versions this config describes.
    ///
    /// # Errors
    ///
    /// Returns an error if either version string is malformed or does not
    /// name a concrete version.
    pub fn versions(&self) -> Result<ModelVersions> {
        let versions = ModelVersions::from_version_string(&self.model_version)?;
        match &self.model_version_local {
            Some(local) => versions.with_local(local),
            None => Ok(versions),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# modelshift configuration
#
# Target schema version for persisted objects, as a JSON version record.
model_version = '{"major":1,"minor":0,"patch":0}'

# Target schema version for local-only objects (defaults to model_version).
# model_version_local = '{"major":1,"minor":0,"patch":0}'
"#
    }

    /// Parse config from TOML text, validating the versions eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names an invalid
    /// version.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MigrationConfig = toml::from_str(content)?;
        config.versions()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
            tracing::info!(path = %path.display(), "wrote default migration config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
