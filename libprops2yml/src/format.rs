//! Value display rules.

/// Two-character escape joining the lines of a continued value.
pub const NEWLINE_MARKER: &str = "\\n";

/// Trailing character that continues a value on the next source line.
const LINE_CONTINUATION: char = '\\';

/// Choose how a raw value is written in YAML.
///
/// Values holding a newline marker are double-quoted so YAML reads the
/// escape; values holding a colon are single-quoted; the rest are plain.
pub fn format_value(raw: &str) -> String {
    if raw.contains(NEWLINE_MARKER) {
        format!("\"{}\"", raw)
    } else if raw.contains(':') {
        format!("'{}'", raw)
    } else {
        raw.trim().to_string()
    }
}

/// Remove one matching pair of `"` or `'` from the ends of a value.
///
/// A lone quote character counts as both ends and strips to nothing.
pub(crate) fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}

/// Append a fragment to an accumulated raw value.
///
/// The stored text is first settled to what it displays as, minus any
/// surrounding quotes, so `"abc"` extended by `\nmore` reads `abc\nmore`
/// and not `"abc"\nmore`. A trailing `\` is then dropped when the fragment
/// is a continuation line, which reassembles `line\` + `\nmore` into
/// `line\nmore`.
pub fn merge_fragment(raw: &mut String, fragment: &str) {
    if !raw.is_empty() {
        let settled = strip_quotes(&format_value(raw)).to_string();
        *raw = settled;
    }
    if raw.ends_with(LINE_CONTINUATION) && fragment.starts_with(NEWLINE_MARKER) {
        raw.pop();
    }
    raw.push_str(fragment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(format_value("127.0.0.1"), "127.0.0.1");
        assert_eq!(format_value("  spaced  "), "spaced");
        assert_eq!(format_value(""), "");
    }

    #[test]
    fn test_colon_is_single_quoted() {
        assert_eq!(
            format_value("/path2: must be escaped"),
            "'/path2: must be escaped'"
        );
    }

    #[test]
    fn test_newline_marker_wins_over_colon() {
        assert_eq!(format_value("a:\\nb"), "\"a:\\nb\"");
    }

    #[test]
    fn test_merge_strips_continuation_backslash() {
        let mut raw = String::from("line\\");
        merge_fragment(&mut raw, "\\nBre\\");
        merge_fragment(&mut raw, "\\nak");
        assert_eq!(raw, "line\\nBre\\nak");
    }

    #[test]
    fn test_merge_plain_concatenation() {
        let mut raw = String::from("C:\\");
        merge_fragment(&mut raw, "temp");
        assert_eq!(raw, "C:\\temp");

        let mut raw = String::from("first");
        merge_fragment(&mut raw, "\\nsecond");
        assert_eq!(raw, "first\\nsecond");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"abc'"), "\"abc'");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn test_merge_strips_quotes_from_stored_value() {
        let mut raw = String::from("\"abc\"");
        merge_fragment(&mut raw, "\\nmore");
        assert_eq!(raw, "abc\\nmore");
        assert_eq!(format_value(&raw), "\"abc\\nmore\"");

        let mut raw = String::from("'abc'");
        merge_fragment(&mut raw, "x");
        assert_eq!(raw, "abcx");
    }
}
