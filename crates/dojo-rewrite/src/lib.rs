//! # dojo-rewrite
//!
//! Rewrites array-typed scalar fields in a Prisma schema into a form every
//! database provider accepts:
//!
//! ```text
//! tags      String[]        ->  tags      Json @default("[]")
//! metadata  Json[]          ->  metadata  Json @default("[]")
//! ```
//!
//! The schema is treated as plain text. Only lines where the array marker is
//! the last token are touched, so fields with trailing attributes
//! (`String[] @db.Text`, relations with `@relation(...)`) stay as they are.
//! A relation-like field whose marker ends the line is converted too; text
//! matching cannot tell the two apart.

mod error;

pub use error::RewriteError;

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Replacement type declaration for both passes.
pub const PORTABLE_JSON_DECL: &str = r#"Json @default("[]")"#;

// `[ \t]` rather than `\s` keeps every match inside a single line.
static STRING_ARRAY_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]+\w+[ \t]+)String\[\][ \t]*(\r?)$").expect("valid regex")
});

static JSON_ARRAY_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]+\w+[ \t]+)Json\[\][ \t]*(\r?)$").expect("valid regex")
});

/// Result of rewriting schema text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub string_arrays: usize,
    pub json_arrays: usize,
}

impl Rewrite {
    /// Total number of lines converted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.string_arrays + self.json_arrays
    }
}

/// Outcome of [`rewrite_schema_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub string_arrays: usize,
    pub json_arrays: usize,
}

/// Convert `String[]` fields, then `Json[]` fields, to `Json @default("[]")`.
#[must_use]
pub fn rewrite_schema(text: &str) -> Rewrite {
    let (text, string_arrays) = replace_marker(&STRING_ARRAY_FIELD, text);
    let (text, json_arrays) = replace_marker(&JSON_ARRAY_FIELD, &text);
    Rewrite {
        text,
        string_arrays,
        json_arrays,
    }
}

fn replace_marker(pattern: &Regex, text: &str) -> (String, usize) {
    let count = pattern.find_iter(text).count();
    let replacement = format!("${{1}}{PORTABLE_JSON_DECL}${{2}}");
    (pattern.replace_all(text, replacement.as_str()).into_owned(), count)
}

/// Rewrite the schema at `path` in place.
///
/// The file is overwritten directly; there is no backup, and an interrupted
/// write can leave it truncated. Succeeds even when nothing matched.
///
/// # Errors
///
/// Returns `RewriteError::Read` if the file is missing, unreadable, or not
/// UTF-8, and `RewriteError::Write` if it cannot be written back.
pub fn rewrite_schema_file(path: impl AsRef<Path>) -> Result<RewriteReport, RewriteError> {
    let path = path.as_ref();
    let original = std::fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rewrite_schema(&original);
    tracing::debug!(
        path = %path.display(),
        string_arrays = rewrite.string_arrays,
        json_arrays = rewrite.json_arrays,
        total = rewrite.total(),
        "rewrote schema text"
    );

    std::fs::write(path, &rewrite.text).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RewriteReport {
        path: path.to_path_buf(),
        string_arrays: rewrite.string_arrays,
        json_arrays: rewrite.json_arrays,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::string_array("  tags String[]", "  tags Json @default(\"[]\")")]
    #[case::json_array("  payload Json[]", "  payload Json @default(\"[]\")")]
    #[case::aligned_columns(
        "  belts        String[]",
        "  belts        Json @default(\"[]\")"
    )]
    #[case::tab_indent("\tnotes\tJson[]", "\tnotes\tJson @default(\"[]\")")]
    #[case::trailing_whitespace("  tags String[]   ", "  tags Json @default(\"[]\")")]
    fn converts_trailing_array_marker(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_schema(input).text, expected);
    }

    #[rstest]
    #[case::trailing_attribute("  tags String[] @db.Text")]
    #[case::relation("  students Student[] @relation(\"Enrolled\")")]
    #[case::model_relation("  students Student[]")]
    #[case::optional_marker("  tags String[]?")]
    #[case::scalar_string("  name String")]
    #[case::scalar_json("  meta Json")]
    #[case::no_indent("tags String[]")]
    #[case::comment("  // tags String[] @deprecated")]
    fn leaves_other_lines_alone(#[case] input: &str) {
        let rewrite = rewrite_schema(input);
        assert_eq!(rewrite.text, input);
        assert_eq!(rewrite.total(), 0);
    }

    #[test]
    fn rewrites_whole_model_and_counts_each_pass() {
        let schema = "model Student {\n  id        String   @id\n  tags      String[]\n  history   Json[]\n  classes   Class[]  @relation(\"Roster\")\n  aliases   String[]\n}\n";
        let rewrite = rewrite_schema(schema);

        assert_eq!(
            rewrite.text,
            "model Student {\n  id        String   @id\n  tags      Json @default(\"[]\")\n  history   Json @default(\"[]\")\n  classes   Class[]  @relation(\"Roster\")\n  aliases   Json @default(\"[]\")\n}\n"
        );
        assert_eq!(rewrite.string_arrays, 2);
        assert_eq!(rewrite.json_arrays, 1);
        assert_eq!(rewrite.total(), 3);
    }

    #[test]
    fn second_pass_changes_nothing() {
        let schema = "model A {\n  tags String[]\n  blobs Json[]\n}\n";
        let once = rewrite_schema(schema);
        let twice = rewrite_schema(&once.text);
        assert_eq!(twice.text, once.text);
        assert_eq!(twice.total(), 0);
    }

    #[test]
    fn preserves_crlf_line_endings() {
        let schema = "model A {\r\n  tags String[]\r\n  name String\r\n}\r\n";
        let rewrite = rewrite_schema(schema);
        assert_eq!(
            rewrite.text,
            "model A {\r\n  tags Json @default(\"[]\")\r\n  name String\r\n}\r\n"
        );
    }

    #[test]
    fn blank_lines_around_fields_are_kept() {
        let schema = "model A {\n  tags String[]\n\n\n  name String\n}\n";
        let rewrite = rewrite_schema(schema);
        assert_eq!(
            rewrite.text,
            "model A {\n  tags Json @default(\"[]\")\n\n\n  name String\n}\n"
        );
    }

    #[test]
    fn empty_text_is_untouched() {
        assert_eq!(rewrite_schema("").text, "");
    }
}
