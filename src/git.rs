//! Git command runner for snag.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{Result, SnagError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
///
/// Output is kept raw: diff text is whitespace-sensitive, so trimming only
/// happens on demand via [`GitOutput::trimmed`] for porcelain one-liners.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, verbatim.
    pub stdout: String,
    /// Standard error from the command, verbatim.
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Stdout with surrounding whitespace removed, for single-value output
    /// like `rev-parse`.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SnagError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SnagError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.trim().is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.trim().to_string()
        };

        Err(SnagError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any location within a git repository, including worktrees.
/// Running outside a repository is a clean user error (exit 2), not a git
/// failure (exit 3).
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(&cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.trimmed())),
        Err(SnagError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(SnagError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        }
        Err(err) => Err(err),
    }
}

/// Get the staged diff text, the equivalent of `git diff --cached`.
///
/// The returned text is raw stdout decoded as UTF-8, never trimmed.
/// An empty string means nothing is staged.
pub fn staged_diff<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let output = run_git(cwd, &["diff", "--cached"])?;
    Ok(output.stdout)
}

/// Resolve the repository's hooks directory via `git rev-parse --git-path hooks`.
///
/// Git may answer with a path relative to `cwd`; the result is joined onto
/// `cwd` so callers always get an absolute location.
pub fn hooks_dir<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let output = run_git(cwd, &["rev-parse", "--git-path", "hooks"])?;
    let path = PathBuf::from(output.trimmed());
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}
