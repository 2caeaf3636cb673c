//! Tests for marker scanning.

use super::markers::MarkerSet;
use super::scanner::scan_diffs;
use crate::config::Config;
use crate::diff::parse_diff;
use crate::error::SnagError;

fn compiled_defaults() -> MarkerSet {
    MarkerSet::from_config(&Config::default()).unwrap()
}

/// Scan helper: parse a diff and scan it with the default marker set.
fn scan(diff: &str) -> Vec<super::Finding> {
    scan_diffs(&parse_diff(diff), &compiled_defaults())
}

#[test]
fn marker_in_added_line_is_found() {
    let diff = r#"diff --git a/src/a.py b/src/a.py
index abc1234..def5678 100644
--- a/src/a.py
+++ b/src/a.py
@@ -1,3 +1,4 @@
 import os
+# start DONOTCOMMIT debug hack
 import sys
"#;

    let findings = scan(diff);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path, "b/src/a.py");
    assert_eq!(findings[0].hunk_header, "@@ -1,3 +1,4 @@");
    assert_eq!(
        findings[0].added_lines,
        vec!["# start DONOTCOMMIT debug hack"]
    );
}

#[test]
fn all_three_phrases_are_recognized() {
    for phrase in ["start DONOTCOMMIT", "region DONOTCOMMIT", "mark DONOTCOMMIT"] {
        let diff = format!(
            "diff --git a/x.txt b/x.txt\n\
             index abc1234..def5678 100644\n\
             --- a/x.txt\n\
             +++ b/x.txt\n\
             @@ -1,1 +1,2 @@\n\
             +// {}\n",
            phrase
        );
        assert_eq!(scan(&diff).len(), 1, "phrase not recognized: {}", phrase);
    }
}

#[test]
fn matching_is_case_sensitive() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,2 @@
+// start donotcommit
"#;

    assert!(scan(diff).is_empty());
}

/// A marker phrase alone is not enough: the surrounding keyword matters.
#[test]
fn bare_word_is_not_a_marker() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,2 @@
+DONOTCOMMIT without a keyword
"#;

    assert!(scan(diff).is_empty());
}

#[test]
fn marker_only_in_removed_line_is_not_found() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,2 +1,1 @@
-// mark DONOTCOMMIT leftover
 kept line
"#;

    assert!(scan(diff).is_empty());
}

#[test]
fn marker_only_in_context_line_is_not_found() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,2 +1,3 @@
 // start DONOTCOMMIT old, never staged for removal
+harmless new line
"#;

    assert!(scan(diff).is_empty());
}

/// One finding per qualifying hunk, not per qualifying line.
#[test]
fn one_finding_per_hunk() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,3 @@
+// start DONOTCOMMIT first
+// mark DONOTCOMMIT second
"#;

    let findings = scan(diff);
    assert_eq!(findings.len(), 1);
    // The finding carries the hunk's full added-line sequence.
    assert_eq!(findings[0].added_lines.len(), 2);
}

#[test]
fn each_qualifying_hunk_gets_its_own_finding() {
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,2 @@
+// start DONOTCOMMIT one
@@ -10,1 +11,2 @@
+plain line
@@ -20,1 +22,2 @@
+// region DONOTCOMMIT two
"#;

    let findings = scan(diff);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].hunk_header, "@@ -1,1 +1,2 @@");
    assert_eq!(findings[1].hunk_header, "@@ -20,1 +22,2 @@");
}

/// Findings span files and keep diff order.
#[test]
fn findings_cover_all_files_in_order() {
    let diff = r#"diff --git a/a.txt b/a.txt
index abc1234..def5678 100644
--- a/a.txt
+++ b/a.txt
@@ -1,1 +1,2 @@
+// mark DONOTCOMMIT in a
diff --git a/b.txt b/b.txt
index 1111111..2222222 100644
--- a/b.txt
+++ b/b.txt
@@ -1,1 +1,2 @@
+// mark DONOTCOMMIT in b
"#;

    let findings = scan(diff);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].path, "b/a.txt");
    assert_eq!(findings[1].path, "b/b.txt");
}

/// A section without a `+++` label is still reported, with an empty path.
#[test]
fn missing_destination_label_reports_empty_path() {
    // No ---/+++ lines; the hunk follows the index line directly.
    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
@@ -1,1 +1,2 @@
+// start DONOTCOMMIT unlabeled
"#;

    let findings = scan(diff);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path, "");
}

#[test]
fn custom_substring_marker_from_config() {
    let config = Config::from_yaml("markers:\n  - NOCOMMIT\n").unwrap();
    let markers = MarkerSet::from_config(&config).unwrap();

    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,2 @@
+// NOCOMMIT temporary
"#;

    let findings = scan_diffs(&parse_diff(diff), &markers);
    assert_eq!(findings.len(), 1);
}

#[test]
fn regex_marker_pattern_from_config() {
    let config = Config::from_yaml("marker_patterns:\n  - 'DEBUG ONLY:\\s'\n").unwrap();
    let markers = MarkerSet::from_config(&config).unwrap();

    let diff = r#"diff --git a/x.txt b/x.txt
index abc1234..def5678 100644
--- a/x.txt
+++ b/x.txt
@@ -1,1 +1,2 @@
+// DEBUG ONLY: drop before release
"#;

    let findings = scan_diffs(&parse_diff(diff), &markers);
    assert_eq!(findings.len(), 1);
}

#[test]
fn excluded_path_is_skipped() {
    let config = Config::from_yaml("exclude:\n  - 'docs/**'\n").unwrap();
    let markers = MarkerSet::from_config(&config).unwrap();

    let diff = r#"diff --git a/docs/howto.md b/docs/howto.md
index abc1234..def5678 100644
--- a/docs/howto.md
+++ b/docs/howto.md
@@ -1,1 +1,2 @@
+explaining the start DONOTCOMMIT convention
diff --git a/src/lib.rs b/src/lib.rs
index 1111111..2222222 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,1 +1,2 @@
+// start DONOTCOMMIT real one
"#;

    let findings = scan_diffs(&parse_diff(diff), &markers);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path, "b/src/lib.rs");
}

#[test]
fn invalid_regex_pattern_is_user_error() {
    let config = Config::from_yaml("marker_patterns:\n  - '[unclosed'\n").unwrap();
    let result = MarkerSet::from_config(&config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, SnagError::UserError(_)));
    assert!(err.to_string().contains("marker_patterns"));
}

#[test]
fn invalid_exclude_glob_is_user_error() {
    let config = Config::from_yaml("exclude:\n  - 'src/{unclosed'\n").unwrap();
    let result = MarkerSet::from_config(&config);
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), SnagError::UserError(_)));
}
