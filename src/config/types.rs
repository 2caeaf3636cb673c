//! Configuration defaults for snag.

/// Name of the optional config file, looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".snag.yaml";

/// Default marker phrases, matched as exact case-sensitive substrings of
/// added lines.
pub fn default_markers() -> Vec<String> {
    vec![
        "start DONOTCOMMIT".to_string(),
        "region DONOTCOMMIT".to_string(),
        "mark DONOTCOMMIT".to_string(),
    ]
}
