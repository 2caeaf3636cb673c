//! Unified-diff parsing primitives for snag.
//!
//! This module turns the raw text of `git diff --cached` into an ordered
//! sequence of per-file records, each holding its hunks with added and
//! removed line texts. It recovers exactly what the marker scan needs:
//! - which lines a hunk adds and removes (context lines are dropped)
//! - the verbatim hunk coordinate header, for reporting
//! - the `---`/`+++` path labels, when a section carries them
//!
//! Parsing is a single forward pass and never fails: the input comes from
//! a trusted git invocation, so anything structurally unexpected degrades
//! to skip-a-line-and-rescan rather than an error. Truncated input simply
//! ends the pass with whatever was recovered. This is best-effort
//! extraction, not a patch engine: hunks are never applied and file
//! contents are never reconstructed.

mod parser;
mod reader;
mod types;


// Re-export public API
pub use parser::parse_diff;
pub use types::{DiffSet, FileDiff, Hunk};
