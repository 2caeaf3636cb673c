//! Rendering of scan findings.

use crate::error::{Result, SnagError};
use crate::scan::Finding;
use std::fmt::Write;

/// Format findings as the human-readable hook report.
///
/// Output format, one block per finding:
/// ```text
/// DONOTCOMMIT section found @ b/src/a.py @@ -1,3 +1,4 @@
/// +// start DONOTCOMMIT debug hack
/// ```
/// The added lines are re-prefixed with `+` to mirror diff notation.
pub(super) fn render_text(findings: &[Finding]) -> String {
    let mut out = String::new();

    for finding in findings {
        let _ = writeln!(
            out,
            "DONOTCOMMIT section found @ {} {}",
            finding.path, finding.hunk_header
        );
        for line in &finding.added_lines {
            let _ = writeln!(out, "+{}", line);
        }
    }

    out
}

/// Format findings as pretty-printed JSON, for machine consumption.
pub(super) fn render_json(findings: &[Finding]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(findings)
        .map_err(|e| SnagError::UserError(format!("failed to serialize findings: {}", e)))?;
    out.push('\n');
    Ok(out)
}
