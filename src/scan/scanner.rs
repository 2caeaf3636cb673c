//! Core scanning logic over parsed diffs.

use crate::diff::FileDiff;

use super::markers::MarkerSet;
use super::types::Finding;

/// Scan a parsed diff for hunks that add marker-carrying lines.
///
/// For every file, for every hunk, the hunk's added lines are tested
/// against the marker set. A qualifying hunk yields exactly one finding
/// carrying the hunk's full added-line sequence, however many of its lines
/// matched. Removed and context lines never qualify; the marker must be
/// introduced, not merely present in history.
///
/// Findings come back in diff order. A file whose destination path is
/// excluded by config is skipped entirely; a file with no `+++` label is
/// scanned and reported with an empty path.
pub fn scan_diffs(diffs: &[FileDiff], markers: &MarkerSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for diff in diffs {
        let path = diff.to_path.as_deref().unwrap_or("");
        if !markers.should_scan(path) {
            continue;
        }
        for hunk in &diff.hunks {
            if hunk.added.iter().any(|line| markers.is_marked(line)) {
                findings.push(Finding::new(path, &hunk.header, hunk.added.clone()));
            }
        }
    }

    findings
}
