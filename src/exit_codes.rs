//! Exit code constants for the snag CLI.
//!
//! The pre-commit hook mechanism only distinguishes zero from non-zero, but
//! the codes stay distinct so scripts can tell "markers found" apart from a
//! broken invocation:
//! - 0: Success (no markers in the staged diff)
//! - 1: Markers found (the commit must be aborted)
//! - 2: User error (bad args, bad config, not a repository)
//! - 3: Git operation failure

/// Successful execution, nothing flagged.
pub const SUCCESS: i32 = 0;

/// DONOTCOMMIT markers found in the staged diff.
pub const MARKERS_FOUND: i32 = 1;

/// User error: bad arguments, invalid config, or invalid invocation context.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: the diff or repo-detection subprocess failed.
pub const GIT_FAILURE: i32 = 3;
