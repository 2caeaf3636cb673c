//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, SnagError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.snag.yaml` file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SnagError::UserError)` - Read error, parse error, or
    ///   validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SnagError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file if it exists, defaults otherwise.
    ///
    /// A present-but-malformed file is still an error; only absence falls
    /// back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SnagError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `markers` entries must be non-empty (an empty substring would
    ///   match every added line)
    ///
    /// Regex and glob compilation errors are reported later, when the
    /// marker set is built.
    pub fn validate(&self) -> Result<()> {
        for marker in &self.markers {
            if marker.is_empty() {
                return Err(SnagError::UserError(
                    "config validation failed: markers entries must be non-empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
