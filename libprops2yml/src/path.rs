//! Property key paths.
//!
//! A key such as `application.servers[1].path` is split on `.` into
//! segments. A segment of the form `name[index]` addresses element `index`
//! of the sequence stored under `name`; anything else is a plain field name
//! and is kept verbatim, including malformed subscripts.

use std::fmt;

/// One `.`-separated piece of a property key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Field name in the enclosing mapping.
    pub name: &'a str,
    /// Sequence subscript, when the segment is `name[index]`.
    pub index: Option<usize>,
}

impl<'a> Segment<'a> {
    fn parse(text: &'a str) -> Self {
        match split_subscript(text) {
            Some((name, index)) => Segment {
                name,
                index: Some(index),
            },
            None => Segment {
                name: text,
                index: None,
            },
        }
    }
}

/// Split `name[digits]` into its parts.
fn split_subscript(text: &str) -> Option<(&str, usize)> {
    let inner = text.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let (name, digits) = (&inner[..open], &inner[open + 1..]);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // A second subscript (`a[0][1]`) is not part of the key grammar.
    if name.contains('[') || name.contains(']') {
        return None;
    }
    digits.parse().ok().map(|index| (name, index))
}

/// Split a trimmed property key into segments.
pub fn parse_key(key: &str) -> Vec<Segment<'_>> {
    key.split('.').map(Segment::parse).collect()
}

/// Fully-qualified path of a tree location, used to attach comments.
///
/// Built the same way by the parser and the emitter so both agree on the
/// string for a given node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// The root path, which is also where leading comments live.
    pub fn root() -> Self {
        KeyPath(String::new())
    }

    /// Canonical path of a property key (`a[01]` becomes `a[1]`).
    pub fn from_key(key: &str) -> Self {
        let mut path = KeyPath::root();
        for segment in parse_key(key) {
            path = path.field(segment.name);
            if let Some(index) = segment.index {
                path = path.element(index);
            }
        }
        path
    }

    /// Path of field `name` below this one.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            KeyPath(name.to_string())
        } else {
            KeyPath(format!("{}.{}", self.0, name))
        }
    }

    /// Path of sequence element `index` below this one.
    pub fn element(&self, index: usize) -> Self {
        KeyPath(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_indexed() {
        let segments = parse_key("application.servers[12].ip");
        assert_eq!(
            segments,
            vec![
                Segment {
                    name: "application",
                    index: None
                },
                Segment {
                    name: "servers",
                    index: Some(12)
                },
                Segment {
                    name: "ip",
                    index: None
                },
            ]
        );
    }

    #[test]
    fn test_malformed_subscripts_stay_plain() {
        for text in ["a[x]", "a[]", "a[1", "a1]", "a[0][1]", "a[-1]"] {
            assert_eq!(parse_key(text)[0].index, None, "{}", text);
            assert_eq!(parse_key(text)[0].name, text);
        }
    }

    #[test]
    fn test_empty_name_with_index() {
        let segment = &parse_key("[3]")[0];
        assert_eq!(segment.name, "");
        assert_eq!(segment.index, Some(3));
    }

    #[test]
    fn test_key_path_canonical_form() {
        assert_eq!(KeyPath::from_key("a.b[01].c").as_str(), "a.b[1].c");
        assert_eq!(KeyPath::from_key("key1").as_str(), "key1");
        assert_eq!(
            KeyPath::root().field("a").element(0).field("b").as_str(),
            "a[0].b"
        );
        assert!(KeyPath::root().is_root());
    }
}
