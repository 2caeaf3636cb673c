//! Error types for the snag CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for snag operations.
///
/// Each variant maps to a distinct exit code. `MarkersFound` is the one
/// "expected" failure: the scan worked and the commit must be blocked.
#[derive(Error, Debug)]
pub enum SnagError {
    /// The staged diff contains DONOTCOMMIT markers.
    #[error("{0} DONOTCOMMIT section(s) found in staged changes")]
    MarkersFound(usize),

    /// User provided invalid arguments, invalid config, or ran snag in an
    /// invalid context (e.g. outside a git repository).
    #[error("{0}")]
    UserError(String),

    /// Git invocation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl SnagError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SnagError::MarkersFound(_) => exit_codes::MARKERS_FOUND,
            SnagError::UserError(_) => exit_codes::USER_ERROR,
            SnagError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for snag operations.
pub type Result<T> = std::result::Result<T, SnagError>;
