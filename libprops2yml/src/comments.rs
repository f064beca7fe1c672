//! Comments collected during parsing, keyed by the path they follow.

use crate::path::KeyPath;
use std::collections::HashMap;

/// Comment lines grouped by the fully-qualified path of the entry that
/// preceded them. Lines keep their leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentTable {
    by_path: HashMap<KeyPath, Vec<String>>,
}

impl CommentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a comment line after `path`, keeping source order.
    pub fn attach(&mut self, path: KeyPath, line: &str) {
        self.by_path.entry(path).or_default().push(line.to_string());
    }

    /// Comments recorded after `path`, in source order.
    pub fn get(&self, path: &KeyPath) -> &[String] {
        self.by_path.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Comments that appeared before any key.
    pub fn leading(&self) -> &[String] {
        self.get(&KeyPath::root())
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Total number of comment lines.
    pub fn len(&self) -> usize {
        self.by_path.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_keeps_order() {
        let mut table = CommentTable::new();
        let path = KeyPath::from_key("a.b");
        table.attach(path.clone(), "# one");
        table.attach(path.clone(), "# two");
        table.attach(KeyPath::root(), "# header");

        assert_eq!(table.get(&path), ["# one", "# two"]);
        assert_eq!(table.leading(), ["# header"]);
        assert_eq!(table.len(), 3);
        assert!(table.get(&KeyPath::from_key("a")).is_empty());
    }
}
