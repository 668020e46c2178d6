//! In-place rewriting of btop.conf
//!
//! btop.conf is line-oriented `key = "value"` text. Only the color_theme
//! line is touched; every other byte passes through unchanged.

use std::path::{Path, PathBuf};

/// The key this tool rewrites
const THEME_KEY: &str = "color_theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    #[error("cannot read {0:?}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("cannot write {0:?}: {1}")]
    Write(PathBuf, std::io::Error),
}

/// Rewrite the `color_theme` line in the file at `path` to name `theme`.
///
/// Returns whether any line matched. When nothing matches the file is left
/// untouched; no line is inserted.
pub fn set_theme(path: &Path, theme: &str) -> Result<bool, ConfError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfError::Read(path.to_path_buf(), e))?;

    let (rewritten, matched) = apply(&content, theme);
    if matched == 0 {
        return Ok(false);
    }

    std::fs::write(path, rewritten).map_err(|e| ConfError::Write(path.to_path_buf(), e))?;
    Ok(true)
}

/// Apply the substitution to `content`, returning the rewritten text and
/// how many lines matched.
///
/// A line matches when the text before its first `=`, trimmed, equals
/// `color_theme`. Unmatched lines pass through byte-for-byte, terminators
/// included; a matched line keeps its leading whitespace and terminator and
/// is rewritten from the key onward.
fn apply(content: &str, theme: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut matched = 0;

    for raw in content.split_inclusive('\n') {
        let (line, eol) = split_eol(raw);
        if is_theme_line(line) {
            let indent = &line[..line.len() - line.trim_start().len()];
            out.push_str(indent);
            out.push_str(&format!("{} = \"{}\"", THEME_KEY, theme));
            matched += 1;
        } else {
            out.push_str(line);
        }
        out.push_str(eol);
    }

    (out, matched)
}

/// Split a line chunk into its content and terminator bytes
fn split_eol(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Whether a line assigns the theme key
fn is_theme_line(line: &str) -> bool {
    match line.split_once('=') {
        Some((key, _)) => key.trim() == THEME_KEY,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "#? Config file for btop\n\
        color_theme = \"Default\"\n\
        theme_background = True\n\
        update_ms = 2000\n";

    #[test]
    fn test_replaces_theme_line() {
        let (out, matched) = apply(SAMPLE, "hyde");
        assert_eq!(matched, 1);
        assert_eq!(
            out,
            "#? Config file for btop\n\
             color_theme = \"hyde\"\n\
             theme_background = True\n\
             update_ms = 2000\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let (once, _) = apply(SAMPLE, "hyde");
        let (twice, matched) = apply(&once, "hyde");
        assert_eq!(matched, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_leaves_content_unchanged() {
        let content = "theme_background = True\nupdate_ms = 2000\n";
        let (out, matched) = apply(content, "hyde");
        assert_eq!(matched, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn test_commented_line_is_not_a_match() {
        let content = "#color_theme = \"old\"\n";
        let (out, matched) = apply(content, "hyde");
        assert_eq!(matched, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn test_all_matching_lines_replaced() {
        let content = "color_theme = \"a\"\ncolor_theme = \"b\"\n";
        let (out, matched) = apply(content, "hyde");
        assert_eq!(matched, 2);
        assert_eq!(out, "color_theme = \"hyde\"\ncolor_theme = \"hyde\"\n");
    }

    #[test]
    fn test_crlf_lines_preserved() {
        let content = "theme_background = True\r\ncolor_theme = \"Default\"\r\nupdate_ms = 2000\r\n";
        let (out, matched) = apply(content, "hyde");
        assert_eq!(matched, 1);
        assert_eq!(
            out,
            "theme_background = True\r\ncolor_theme = \"hyde\"\r\nupdate_ms = 2000\r\n"
        );
    }

    #[test]
    fn test_leading_whitespace_preserved() {
        let (out, matched) = apply("  color_theme = \"Default\"\n", "hyde");
        assert_eq!(matched, 1);
        assert_eq!(out, "  color_theme = \"hyde\"\n");
    }

    #[test]
    fn test_missing_trailing_newline_preserved() {
        let content = "color_theme = \"a\"";
        let (out, matched) = apply(content, "hyde");
        assert_eq!(matched, 1);
        assert_eq!(out, "color_theme = \"hyde\"");
    }

    #[test]
    fn test_empty_content() {
        let (out, matched) = apply("", "hyde");
        assert_eq!(matched, 0);
        assert_eq!(out, "");
    }

    #[test]
    fn test_theme_line_detection() {
        assert!(is_theme_line("color_theme = \"Default\""));
        assert!(is_theme_line("color_theme=\"Default\""));
        assert!(is_theme_line("  color_theme = \"Default\""));
        assert!(!is_theme_line("#color_theme = \"Default\""));
        assert!(!is_theme_line("color_theme_extra = \"Default\""));
        assert!(!is_theme_line("color_theme"));
    }
}
