//! The `markers` command: show the marker set in effect.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, SnagError};
use crate::git::get_repo_root;
use crate::scan::MarkerSet;

/// Entry point for `snag markers`.
///
/// Loads the repository config and prints the phrases, patterns, and
/// exclusions that `check` would use. Compiling the marker set up front
/// means a broken config is reported here rather than at commit time.
pub fn cmd_markers() -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| SnagError::UserError(format!("failed to resolve working directory: {}", e)))?;
    let repo_root = get_repo_root(&cwd)?;
    let config = Config::load_or_default(repo_root.join(CONFIG_FILE_NAME))?;
    let _ = MarkerSet::from_config(&config)?;

    println!("Marker phrases (substring match, case-sensitive):");
    for marker in &config.markers {
        println!("  {}", marker);
    }

    if !config.marker_patterns.is_empty() {
        println!();
        println!("Marker patterns (regex):");
        for pattern in &config.marker_patterns {
            println!("  {}", pattern);
        }
    }

    if !config.exclude.is_empty() {
        println!();
        println!("Excluded paths:");
        for glob in &config.exclude {
            println!("  {}", glob);
        }
    }

    Ok(())
}
