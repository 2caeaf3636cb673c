//! The `check` command: scan the staged diff for DONOTCOMMIT markers.
//!
//! Flow: resolve the repository root, load `.snag.yaml` if present,
//! compile the marker set, obtain `git diff --cached`, parse, scan,
//! report. Zero findings exit 0 silently; any finding prints the report
//! and exits 1 so the commit-hook mechanism aborts the commit.

mod report;


use crate::cli::CheckArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::diff::parse_diff;
use crate::error::{Result, SnagError};
use crate::git::{get_repo_root, staged_diff};
use crate::scan::{MarkerSet, scan_diffs};
use std::path::Path;

/// Entry point for `snag check`.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| SnagError::UserError(format!("failed to resolve working directory: {}", e)))?;
    run_check(&cwd, &args)
}

/// Run the check from an explicit working directory.
///
/// # Returns
///
/// * `Ok(())` - No markers in the staged diff (exit 0)
/// * `Err(SnagError::MarkersFound)` - After printing the report (exit 1)
/// * `Err(SnagError::UserError)` - Bad config or not a repository (exit 2)
/// * `Err(SnagError::GitError)` - Git invocation failed (exit 3)
pub(crate) fn run_check<P: AsRef<Path>>(cwd: P, args: &CheckArgs) -> Result<()> {
    let repo_root = get_repo_root(cwd)?;
    let config = Config::load_or_default(repo_root.join(CONFIG_FILE_NAME))?;
    let markers = MarkerSet::from_config(&config)?;

    let diff_text = staged_diff(&repo_root)?;
    let diffs = parse_diff(&diff_text);
    let findings = scan_diffs(&diffs, &markers);

    if findings.is_empty() {
        return Ok(());
    }

    if args.json {
        print!("{}", report::render_json(&findings)?);
    } else {
        print!("{}", report::render_text(&findings));
    }

    Err(SnagError::MarkersFound(findings.len()))
}
