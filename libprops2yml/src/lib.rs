//! Convert Java-style `.properties` text into YAML.
//!
//! Flat keys such as `application.servers[0].ip=127.0.0.1` are rebuilt into
//! nested mappings and sequences, and `#` comments are carried over to sit
//! after the entry they followed in the source.
//!
//! # Conversion Pipeline
//!
//! 1. **Scanner**: Classifies each source line as blank, comment,
//!    `key=value` entry, or continuation of the previous value.
//!
//! 2. **Tree builder**: Folds entries into a [`SemanticNode`] tree and
//!    collects comments into a [`CommentTable`] keyed by path.
//!
//! 3. **Emitter**: Writes the tree as block-style YAML, quoting values that
//!    carry newline markers or colons.
//!
//! Every stage is a pure function over text; nothing is shared between
//! calls.

mod comments;
mod emit;
mod error;
mod format;
mod node;
mod parser;
mod path;
mod scanner;

pub use comments::CommentTable;
pub use emit::emit;
pub use error::{ConvertError, Result};
pub use format::{format_value, NEWLINE_MARKER};
pub use node::{Mapping, SemanticNode};
pub use parser::{parse, MAX_SEQUENCE_INDEX};
pub use path::KeyPath;

/// Convert properties text to YAML text.
///
/// # Example
///
/// ```
/// use libprops2yml::convert;
///
/// let yaml = convert("server.port=8080\n# default profile\nserver.host=localhost\n");
/// assert_eq!(yaml, "server:\n  port: 8080\n  # default profile\n  host: localhost\n");
/// ```
pub fn convert(input: &str) -> String {
    let (tree, comments) = parse(input);
    emit(&tree, &comments)
}

/// Convert raw file contents, failing only if they are not UTF-8 text.
pub fn convert_bytes(input: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(input)?;
    Ok(convert(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_bytes_rejects_binary() {
        assert_eq!(
            convert_bytes(&[b'k', b'=', 0xc3, 0x28]),
            Err(ConvertError::InvalidUtf8 { offset: 2 })
        );
    }

    #[test]
    fn test_convert_bytes_text() {
        assert_eq!(convert_bytes(b"a.b=c").unwrap(), "a:\n  b: c\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("\n   \n"), "");
    }

    #[test]
    fn test_header_comments() {
        assert_eq!(convert("# top\n# second\na=1"), "# top\n# second\na: 1\n");
    }
}
