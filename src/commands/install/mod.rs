//! The `install` command: wire snag into the repository's hook mechanism.
//!
//! Writes an executable `pre-commit` hook that runs `snag check`. A hook
//! snag wrote earlier is silently replaced; anything else needs `--force`.


use crate::cli::InstallArgs;
use crate::error::{Result, SnagError};
use crate::git::hooks_dir;
use std::fs;
use std::path::Path;

/// File name of the hook within the hooks directory.
const HOOK_FILE: &str = "pre-commit";

/// Marker comment identifying a hook written by snag.
const HOOK_TAG: &str = "# Installed by snag.";

/// The hook script body.
const HOOK_SCRIPT: &str = "#!/bin/sh\n\
    # Installed by snag. Blocks commits whose staged diff adds DONOTCOMMIT markers.\n\
    exec snag check\n";

/// Entry point for `snag install`.
pub fn cmd_install(args: InstallArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| SnagError::UserError(format!("failed to resolve working directory: {}", e)))?;
    let hook_path = run_install(&cwd, &args)?;
    println!("Installed pre-commit hook: {}", hook_path.display());
    Ok(())
}

/// Install the hook from an explicit working directory.
///
/// Returns the path of the written hook.
pub(crate) fn run_install<P: AsRef<Path>>(cwd: P, args: &InstallArgs) -> Result<std::path::PathBuf> {
    let hooks = hooks_dir(cwd)?;
    fs::create_dir_all(&hooks).map_err(|e| {
        SnagError::UserError(format!(
            "failed to create hooks directory '{}': {}",
            hooks.display(),
            e
        ))
    })?;

    let hook_path = hooks.join(HOOK_FILE);
    if hook_path.exists() && !args.force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if !existing.contains(HOOK_TAG) {
            return Err(SnagError::UserError(format!(
                "a pre-commit hook already exists at '{}' and was not installed by snag.\n\n\
                 Re-run with --force to overwrite it, or chain `snag check` into the existing hook.",
                hook_path.display()
            )));
        }
    }

    fs::write(&hook_path, HOOK_SCRIPT).map_err(|e| {
        SnagError::UserError(format!(
            "failed to write hook '{}': {}",
            hook_path.display(),
            e
        ))
    })?;

    make_executable(&hook_path)?;

    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| {
            SnagError::UserError(format!("failed to stat hook '{}': {}", path.display(), e))
        })?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms).map_err(|e| {
        SnagError::UserError(format!(
            "failed to mark hook '{}' executable: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    // Git on Windows runs hooks through sh; no permission bit to set.
    Ok(())
}
