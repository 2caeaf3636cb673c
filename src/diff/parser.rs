//! Core diff parsing logic.

use super::reader::LineCursor;
use super::types::{DiffSet, FileDiff, Hunk};

/// Parse the complete text of a unified diff into a [`DiffSet`].
///
/// The text is expected in the conventional format of `git diff --cached`
/// (non-colorized, non-word-diff). Lines that are not part of a recognized
/// file section are skipped, and input may end mid-structure; whatever was
/// recovered up to that point is returned. This never fails.
pub fn parse_diff(text: &str) -> DiffSet {
    let mut cursor = LineCursor::new(text);
    let mut result = Vec::new();

    while let Some(line) = cursor.current() {
        if !is_diff_header(line) {
            cursor.advance();
            continue;
        }
        cursor.advance();

        skip_metadata(&mut cursor);

        let mut file = FileDiff::default();
        if let Some(label) = path_label(cursor.current(), "--- ") {
            file.from_path = Some(label.to_string());
            cursor.advance();
        }
        if let Some(label) = path_label(cursor.current(), "+++ ") {
            file.to_path = Some(label.to_string());
            cursor.advance();
        }

        file.hunks = read_hunks(&mut cursor);
        result.push(file);
    }

    result
}

/// Recognize a `diff --git <root>/<path> <root>/<path>` header line.
///
/// Each side is a single path-root token (word characters, e.g. a revision
/// label like `a` or `b`), a slash, and a non-empty path. Paths may contain
/// spaces, so every space is tried as the separator between the two sides.
pub(super) fn is_diff_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("diff --git ") else {
        return false;
    };
    rest.match_indices(' ')
        .any(|(sp, _)| is_rooted_path(&rest[..sp]) && is_rooted_path(&rest[sp + 1..]))
}

/// Check for `<root>/<path>` shape: a non-empty word-character root token,
/// a slash, and a non-empty remainder.
fn is_rooted_path(token: &str) -> bool {
    match token.find('/') {
        Some(slash) if slash > 0 => {
            token[..slash]
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
                && !token[slash + 1..].is_empty()
        }
        _ => false,
    }
}

/// Consume the metadata lines that may sit between the diff header and the
/// path labels. Each is consumed if present, skipped if absent, in this
/// fixed order.
fn skip_metadata(cursor: &mut LineCursor) {
    for prefix in ["new file mode", "old mode", "new mode", "index"] {
        if cursor.current().is_some_and(|l| l.starts_with(prefix)) {
            cursor.advance();
        }
    }
}

/// Capture the non-empty label of a `--- ` or `+++ ` line.
fn path_label<'a>(line: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    line.and_then(|l| l.strip_prefix(prefix))
        .filter(|label| !label.is_empty())
}

/// Read consecutive hunks until a line that neither is a hunk header nor
/// starts with the hunk marker character.
///
/// `@`-prefixed lines that do not match the full header shape (combined
/// diff headers, malformed coordinates) are noise and are skipped.
fn read_hunks(cursor: &mut LineCursor) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    loop {
        let Some(line) = cursor.current() else { break };
        if !line.starts_with('@') {
            break;
        }
        let Some(header) = match_hunk_header(line) else {
            cursor.advance();
            continue;
        };
        let mut hunk = Hunk {
            header,
            removed: Vec::new(),
            added: Vec::new(),
        };
        read_hunk_body(cursor, &mut hunk);
        hunks.push(hunk);
    }
    hunks
}

/// Consume the body of one hunk, starting on its header line.
///
/// Addition and deletion lines are stored with exactly their one-character
/// prefix stripped. Context lines (space) and "no newline at end of file"
/// markers (backslash) are consumed but not retained. The first line that
/// matches none of the four forms is the boundary: it is left current for
/// the caller, since it may be the next hunk header or the next file's
/// diff header.
fn read_hunk_body(cursor: &mut LineCursor, hunk: &mut Hunk) {
    loop {
        cursor.advance();
        let Some(line) = cursor.current() else { break };
        if let Some(text) = line.strip_prefix('+') {
            hunk.added.push(text.to_string());
        } else if let Some(text) = line.strip_prefix('-') {
            hunk.removed.push(text.to_string());
        } else if line.starts_with(' ') || line.starts_with('\\') {
            // context line or no-newline marker
        } else {
            break;
        }
    }
}

/// Match the hunk coordinate header at the start of `line`.
///
/// Shape: one or more `@`, space, `-` + number + optional `,count`, space,
/// `+` + number + optional `,count`, space, one or more `@`. Returns the
/// matched header text only, excluding any section heading git appends
/// after the closing marker run.
pub(super) fn match_hunk_header(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos] == b'@' {
        pos += 1;
    }
    if pos == 0 {
        return None;
    }
    pos = expect(bytes, pos, b' ')?;
    pos = range_token(bytes, pos, b'-')?;
    pos = expect(bytes, pos, b' ')?;
    pos = range_token(bytes, pos, b'+')?;
    pos = expect(bytes, pos, b' ')?;
    let close_start = pos;
    while pos < bytes.len() && bytes[pos] == b'@' {
        pos += 1;
    }
    if pos == close_start {
        return None;
    }
    Some(line[..pos].to_string())
}

fn expect(bytes: &[u8], pos: usize, byte: u8) -> Option<usize> {
    (bytes.get(pos) == Some(&byte)).then_some(pos + 1)
}

/// Consume `sign` followed by a line number and an optional `,count`.
fn range_token(bytes: &[u8], pos: usize, sign: u8) -> Option<usize> {
    let mut pos = expect(bytes, pos, sign)?;
    pos = digits(bytes, pos)?;
    if bytes.get(pos) == Some(&b',') {
        pos = digits(bytes, pos + 1)?;
    }
    Some(pos)
}

/// Consume one or more ASCII digits.
fn digits(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > pos).then_some(end)
}
