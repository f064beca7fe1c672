//! Phase 2: Tree builder
//!
//! Scanned lines are folded into a [`SemanticNode`] tree. Each scalar
//! accumulates its raw text while parsing and is formatted for display once,
//! when the document is complete.

use log::{debug, warn};

use crate::comments::CommentTable;
use crate::error::PathConflict;
use crate::format::{format_value, merge_fragment, NEWLINE_MARKER};
use crate::node::{Mapping, SemanticNode};
use crate::path::{parse_key, KeyPath, Segment};
use crate::scanner::{scan, LineKind};

/// Largest sequence subscript accepted in a key.
///
/// Missing elements below an index are padded, so a key like
/// `a[4000000000000].b` would otherwise try to allocate that many nodes.
pub const MAX_SEQUENCE_INDEX: usize = 100_000;

/// Builds the tree for one document.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    root: Mapping,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fragment` to the raw value stored at `key`, creating the
    /// mappings and sequences along the way.
    ///
    /// Nothing is modified when the key runs into a node of another shape.
    pub(crate) fn insert(&mut self, key: &str, fragment: &str) -> Result<(), PathConflict> {
        let segments = parse_key(key);
        if let Some(index) = segments
            .iter()
            .filter_map(|segment| segment.index)
            .find(|&index| index > MAX_SEQUENCE_INDEX)
        {
            return Err(PathConflict::IndexTooLarge {
                path: key.to_string(),
                index,
                max: MAX_SEQUENCE_INDEX,
            });
        }
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };

        let mut path = KeyPath::root();
        let mut map = &mut self.root;
        for segment in parents {
            path = path.field(segment.name);
            let slot = map
                .entry(segment.name.to_string())
                .or_insert_with(|| new_container(segment));
            map = match segment.index {
                None => match slot {
                    SemanticNode::Mapping(child) => child,
                    other => {
                        return Err(PathConflict::NotMapping {
                            path: path.to_string(),
                            found: other.kind(),
                        })
                    }
                },
                Some(index) => {
                    let items = match slot {
                        SemanticNode::Sequence(items) => items,
                        other => {
                            return Err(PathConflict::NotSequence {
                                path: path.to_string(),
                                found: other.kind(),
                            })
                        }
                    };
                    path = path.element(index);
                    match element_at(items, index) {
                        SemanticNode::Mapping(child) => child,
                        other => {
                            return Err(PathConflict::NotMapping {
                                path: path.to_string(),
                                found: other.kind(),
                            })
                        }
                    }
                }
            };
        }

        path = path.field(last.name);
        let slot = match last.index {
            None => map
                .entry(last.name.to_string())
                .or_insert_with(|| SemanticNode::Scalar(String::new())),
            Some(index) => {
                let slot = map
                    .entry(last.name.to_string())
                    .or_insert_with(|| SemanticNode::Sequence(Vec::new()));
                let items = match slot {
                    SemanticNode::Sequence(items) => items,
                    other => {
                        return Err(PathConflict::NotSequence {
                            path: path.to_string(),
                            found: other.kind(),
                        })
                    }
                };
                path = path.element(index);
                let item = element_at(items, index);
                if item.is_empty_container() {
                    *item = SemanticNode::Scalar(String::new());
                }
                item
            }
        };

        match slot {
            SemanticNode::Scalar(raw) => {
                merge_fragment(raw, fragment);
                Ok(())
            }
            other => Err(PathConflict::NotScalar {
                path: path.to_string(),
                found: other.kind(),
            }),
        }
    }

    /// Format every accumulated value and return the root mapping.
    pub fn finish(self) -> SemanticNode {
        let mut root = SemanticNode::Mapping(self.root);
        finalize(&mut root);
        root
    }
}

fn new_container(segment: &Segment<'_>) -> SemanticNode {
    match segment.index {
        Some(_) => SemanticNode::Sequence(Vec::new()),
        None => SemanticNode::empty_mapping(),
    }
}

/// Element `index`, padding the sequence with empty mappings as needed.
///
/// Callers bound `index` by [`MAX_SEQUENCE_INDEX`].
fn element_at(items: &mut Vec<SemanticNode>, index: usize) -> &mut SemanticNode {
    if items.len() <= index {
        items.resize_with(index + 1, SemanticNode::empty_mapping);
    }
    &mut items[index]
}

fn finalize(node: &mut SemanticNode) {
    match node {
        SemanticNode::Scalar(raw) => *raw = format_value(raw),
        SemanticNode::Mapping(map) => map.values_mut().for_each(finalize),
        SemanticNode::Sequence(items) => items.iter_mut().for_each(finalize),
    }
}

/// Parse properties text into a tree and the comments that follow each key.
pub fn parse(source: &str) -> (SemanticNode, CommentTable) {
    let mut builder = TreeBuilder::new();
    let mut comments = CommentTable::new();
    let mut last_key: Option<&str> = None;
    let mut entries = 0usize;

    for scan_line in scan(source) {
        let line = scan_line.line_num + 1;
        match scan_line.kind {
            LineKind::Blank => {}
            LineKind::Comment(text) => {
                let path = last_key.map(KeyPath::from_key).unwrap_or_default();
                comments.attach(path, text);
            }
            LineKind::Entry { key, value } => {
                last_key = Some(key);
                entries += 1;
                if let Err(err) = builder.insert(key, value) {
                    warn!(line = line, key = key; "Dropping value: {}", err);
                }
            }
            LineKind::Continuation(text) => {
                let Some(key) = last_key else {
                    warn!(line = line; "Dropping continuation line before any key");
                    continue;
                };
                let fragment = format!("{}{}", NEWLINE_MARKER, text);
                if let Err(err) = builder.insert(key, &fragment) {
                    warn!(line = line, key = key; "Dropping continuation: {}", err);
                }
            }
        }
    }

    debug!(entries = entries, comments = comments.len(); "Parsed properties");
    (builder.finish(), comments)
}
