//! Semantic tree rebuilt from flat property keys.

use indexmap::IndexMap;
use std::fmt;

/// Ordered mapping; iteration follows first insertion.
pub type Mapping = IndexMap<String, SemanticNode>;

/// A node in the tree reconstructed from property keys.
#[derive(Clone, PartialEq, Eq)]
pub enum SemanticNode {
    /// Leaf value, formatted for output (may carry its own quotes).
    Scalar(String),
    /// Nested keys in first-seen order.
    Mapping(Mapping),
    /// Indexed elements from `name[i]` keys.
    Sequence(Vec<SemanticNode>),
}

impl SemanticNode {
    /// An empty mapping, used for the root and as sequence filler.
    pub fn empty_mapping() -> Self {
        SemanticNode::Mapping(Mapping::new())
    }

    /// Returns the text if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            SemanticNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the entries if this is a `Mapping`.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            SemanticNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a reference to the items if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&Vec<SemanticNode>> {
        match self {
            SemanticNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a node by field name (mapping) or decimal index (sequence).
    pub fn get(&self, key: &str) -> Option<&SemanticNode> {
        match self {
            SemanticNode::Mapping(map) => map.get(key),
            SemanticNode::Sequence(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            SemanticNode::Scalar(_) => None,
        }
    }

    /// Returns `true` for a mapping or sequence with no children.
    pub fn is_empty_container(&self) -> bool {
        match self {
            SemanticNode::Mapping(map) => map.is_empty(),
            SemanticNode::Sequence(items) => items.is_empty(),
            SemanticNode::Scalar(_) => false,
        }
    }

    /// Short name of the variant, for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SemanticNode::Scalar(_) => "scalar",
            SemanticNode::Mapping(_) => "mapping",
            SemanticNode::Sequence(_) => "sequence",
        }
    }
}

impl Default for SemanticNode {
    fn default() -> Self {
        SemanticNode::empty_mapping()
    }
}

impl fmt::Debug for SemanticNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticNode::Scalar(s) => write!(f, "{:?}", s),
            SemanticNode::Mapping(map) => f.debug_map().entries(map).finish(),
            SemanticNode::Sequence(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl From<String> for SemanticNode {
    fn from(s: String) -> Self {
        SemanticNode::Scalar(s)
    }
}

impl From<&str> for SemanticNode {
    fn from(s: &str) -> Self {
        SemanticNode::Scalar(s.to_string())
    }
}

impl From<Vec<SemanticNode>> for SemanticNode {
    fn from(items: Vec<SemanticNode>) -> Self {
        SemanticNode::Sequence(items)
    }
}

impl From<Mapping> for SemanticNode {
    fn from(map: Mapping) -> Self {
        SemanticNode::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_field_and_index() {
        let mut item = Mapping::new();
        item.insert("ip".to_string(), "127.0.0.1".into());
        let node: SemanticNode = vec![SemanticNode::empty_mapping(), item.into()].into();

        assert_eq!(
            node.get("1").and_then(|n| n.get("ip")).and_then(|n| n.as_scalar()),
            Some("127.0.0.1")
        );
        assert!(node.get("0").map(|n| n.is_empty_container()).unwrap_or(false));
        assert!(node.get("2").is_none());
        assert!(node.get("ip").is_none());
    }

    #[test]
    fn test_debug_keeps_insertion_order() {
        let mut map = Mapping::new();
        map.insert("z".to_string(), "1".into());
        map.insert("a".to_string(), "2".into());
        let node = SemanticNode::Mapping(map);
        assert_eq!(format!("{:?}", node), r#"{"z": "1", "a": "2"}"#);
    }
}
