//! Config struct definition and default implementation.

use super::types::default_markers;
use serde::{Deserialize, Serialize};

/// Configuration for snag.
///
/// This struct represents the contents of `.snag.yaml` at the repository
/// root. Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker phrases matched as exact case-sensitive substrings of added
    /// lines. Replacing this list replaces the built-in phrases.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Additional regex patterns matched against added lines.
    #[serde(default)]
    pub marker_patterns: Vec<String>,

    /// Glob patterns for repo-relative paths to skip while scanning
    /// (e.g. `docs/**`, `vendor/**`).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            marker_patterns: Vec::new(),
            exclude: Vec::new(),
        }
    }
}
