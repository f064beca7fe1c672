//! Error types for properties conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error type for conversion.
///
/// Text input always converts; the only failure is input that is not text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

impl From<std::str::Utf8Error> for ConvertError {
    fn from(e: std::str::Utf8Error) -> Self {
        ConvertError::InvalidUtf8 {
            offset: e.valid_up_to(),
        }
    }
}

/// A key path that cannot be stored because the tree already holds a node
/// of a different shape somewhere along it.
///
/// The parser logs these and drops the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathConflict {
    /// A mapping was needed but something else is stored.
    #[error("\"{path}\" holds a {found}, not a mapping")]
    NotMapping { path: String, found: &'static str },

    /// A sequence was needed but something else is stored.
    #[error("\"{path}\" holds a {found}, not a sequence")]
    NotSequence { path: String, found: &'static str },

    /// A scalar was needed but a mapping or sequence is stored.
    #[error("\"{path}\" holds a {found} of nested keys, not a value")]
    NotScalar { path: String, found: &'static str },

    /// A subscript is past the largest sequence index the builder pads to.
    #[error("\"{path}\" uses index {index}, above the limit of {max}")]
    IndexTooLarge {
        path: String,
        index: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_offset() {
        let bytes = vec![b'a', b'=', 0xff, b'b'];
        let err: ConvertError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, ConvertError::InvalidUtf8 { offset: 2 });
        assert_eq!(
            err.to_string(),
            "Input is not valid UTF-8 (first bad byte at offset 2)"
        );
    }

    #[test]
    fn test_conflict_messages() {
        let err = PathConflict::NotSequence {
            path: "a.b".to_string(),
            found: "scalar",
        };
        assert_eq!(err.to_string(), "\"a.b\" holds a scalar, not a sequence");

        let err = PathConflict::IndexTooLarge {
            path: "a[99999999]".to_string(),
            index: 99_999_999,
            max: 100_000,
        };
        assert_eq!(
            err.to_string(),
            "\"a[99999999]\" uses index 99999999, above the limit of 100000"
        );
    }
}
