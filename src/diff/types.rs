//! Parsed diff records.

/// One contiguous changed region within a file's diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The coordinate header, e.g. `@@ -1,3 +1,4 @@`, kept verbatim.
    ///
    /// Only the matched header itself is retained; the section heading git
    /// appends after the closing `@@` is not part of it. No arithmetic is
    /// ever done on the ranges, so they stay textual.
    pub header: String,
    /// Removed line texts in order of appearance, without the leading `-`.
    pub removed: Vec<String>,
    /// Added line texts in order of appearance, without the leading `+`.
    pub added: Vec<String>,
}

/// One file section of a unified diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiff {
    /// Path label from the `---` line, verbatim (e.g. `a/src/lib.rs` or
    /// `/dev/null`). `None` when the section omits the line, as binary or
    /// rename-only sections do.
    pub from_path: Option<String>,
    /// Path label from the `+++` line, verbatim (e.g. `b/src/lib.rs`).
    pub to_path: Option<String>,
    /// Hunks in order of appearance.
    pub hunks: Vec<Hunk>,
}

/// All file sections of one diff, in order of appearance.
pub type DiffSet = Vec<FileDiff>;
