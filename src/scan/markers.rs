//! Compiled marker matching.

use crate::config::Config;
use crate::error::{Result, SnagError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

/// Compiled marker set for efficient matching.
///
/// Caches compiled regexes and the exclusion glob set for reuse across
/// every added line of the diff. Create once per run.
pub struct MarkerSet {
    /// Substring phrases, matched case-sensitively.
    phrases: Vec<String>,
    /// Compiled regex patterns paired with their original string form.
    patterns: Vec<(Regex, String)>,
    /// Exclusion globs over repo-relative destination paths.
    excludes: GlobSet,
}

impl std::fmt::Debug for MarkerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerSet")
            .field("phrases", &self.phrases)
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MarkerSet {
    /// Compile the marker set from config.
    ///
    /// # Returns
    ///
    /// * `Ok(MarkerSet)` - Successfully compiled set
    /// * `Err(SnagError::UserError)` - A regex or glob pattern failed to
    ///   compile (config error, exit 2)
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.marker_patterns.len());
        for pattern_str in &config.marker_patterns {
            let regex = Regex::new(pattern_str).map_err(|e| {
                SnagError::UserError(format!(
                    "invalid regex in marker_patterns: '{}' - {}\n\
                     Fix: edit .snag.yaml and correct or remove this pattern.",
                    pattern_str, e
                ))
            })?;
            patterns.push((regex, pattern_str.clone()));
        }

        Ok(Self {
            phrases: config.markers.clone(),
            patterns,
            excludes: build_globset(&config.exclude)?,
        })
    }

    /// Check if an added line carries a marker.
    ///
    /// A line matches if it contains any configured phrase as a substring
    /// anywhere in the line, or matches any configured regex pattern.
    pub fn is_marked(&self, line: &str) -> bool {
        self.phrases.iter().any(|phrase| line.contains(phrase))
            || self.patterns.iter().any(|(regex, _)| regex.is_match(line))
    }

    /// Check if a destination path label should be scanned.
    ///
    /// The label's leading path-root token (`b/`) is dropped before glob
    /// matching, so excludes are written against repo-relative paths.
    pub fn should_scan(&self, path_label: &str) -> bool {
        !self.excludes.is_match(repo_relative(path_label))
    }
}

/// Strip the single path-root token from a diff path label.
fn repo_relative(label: &str) -> &str {
    label.split_once('/').map_or(label, |(_, rest)| rest)
}

/// Build a GlobSet from the configured exclusion patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            SnagError::UserError(format!(
                "invalid glob pattern in exclude: '{}' - {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| SnagError::UserError(format!("failed to compile exclude globs: {}", e)))
}
