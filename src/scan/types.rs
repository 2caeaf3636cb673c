//! Core types for scan findings.

use serde::Serialize;

/// A report that one hunk adds at least one marker-carrying line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Destination path label as it appeared on the `+++` line (e.g.
    /// `b/src/a.py`). Empty when the file section omitted the label.
    pub path: String,
    /// The hunk's coordinate header, verbatim.
    pub hunk_header: String,
    /// The full added-line sequence of the flagged hunk, without `+`
    /// prefixes.
    pub added_lines: Vec<String>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        path: impl Into<String>,
        hunk_header: impl Into<String>,
        added_lines: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            hunk_header: hunk_header.into(),
            added_lines,
        }
    }
}
