//! Phase 1: Scanner
//!
//! The scanner splits properties text into lines and classifies each one,
//! in priority order, as blank, comment, `key=value` entry, or continuation
//! of the previous entry's value.

/// What a single source line contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Only whitespace.
    Blank,
    /// Trimmed comment text, `#` included.
    Comment(&'a str),
    /// Trimmed key and value, split on the first `=`.
    Entry { key: &'a str, value: &'a str },
    /// Trimmed text extending the previous entry's value.
    Continuation(&'a str),
}

/// A classified source line.
#[derive(Debug, Clone, Copy)]
pub struct ScanLine<'a> {
    pub kind: LineKind<'a>,
    /// Zero-based line number for diagnostics.
    pub line_num: usize,
}

/// Classify a single line.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment(trimmed)
    } else if let Some((key, value)) = line.split_once('=') {
        LineKind::Entry {
            key: key.trim(),
            value: value.trim(),
        }
    } else {
        LineKind::Continuation(trimmed)
    }
}

/// Scan source text into classified lines.
pub fn scan(source: &str) -> impl Iterator<Item = ScanLine<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(line_num, line)| ScanLine {
            kind: classify(line),
            line_num,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t "), LineKind::Blank);
    }

    #[test]
    fn test_comment_wins_over_equals() {
        assert_eq!(classify("  # a=b  "), LineKind::Comment("# a=b"));
    }

    #[test]
    fn test_entry_splits_on_first_equals() {
        assert_eq!(
            classify(" url = jdbc:h2:mem:db;MODE=MySQL "),
            LineKind::Entry {
                key: "url",
                value: "jdbc:h2:mem:db;MODE=MySQL"
            }
        );
        assert_eq!(
            classify("empty="),
            LineKind::Entry {
                key: "empty",
                value: ""
            }
        );
    }

    #[test]
    fn test_continuation() {
        assert_eq!(classify("    Bre\\"), LineKind::Continuation("Bre\\"));
    }

    #[test]
    fn test_scan_numbers_lines() {
        let lines: Vec<_> = scan("a=1\r\n\n# c\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].line_num, 2);
        assert_eq!(
            lines[0].kind,
            LineKind::Entry {
                key: "a",
                value: "1"
            }
        );
        assert_eq!(lines[1].kind, LineKind::Blank);
    }
}
