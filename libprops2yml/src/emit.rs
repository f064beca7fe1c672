//! Phase 3: YAML emitter
//!
//! Walks the tree in insertion order and writes block-style YAML with two
//! spaces per level. Comments recorded for a path are written right after
//! that path's entry, at the entry's indentation.

use crate::comments::CommentTable;
use crate::node::{Mapping, SemanticNode};
use crate::path::KeyPath;

/// Spaces per nesting level.
const INDENT_STEP: usize = 2;

/// Render a tree and its comments as YAML text.
///
/// Every line, including the last, ends with `\n`. An empty scalar is
/// written as a bare `key:` (or `-`) with no trailing space, which YAML
/// reads as null.
pub fn emit(tree: &SemanticNode, comments: &CommentTable) -> String {
    let mut out = String::new();
    for comment in comments.leading() {
        push_line(&mut out, 0, comment);
    }

    let root = KeyPath::root();
    match tree {
        SemanticNode::Mapping(map) => emit_mapping(&mut out, map, comments, 0, &root),
        SemanticNode::Sequence(items) => emit_items(&mut out, items, comments, 0, &root),
        SemanticNode::Scalar(s) => push_line(&mut out, 0, s),
    }
    out
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&" ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

fn push_comments(out: &mut String, comments: &CommentTable, indent: usize, path: &KeyPath) {
    if path.is_root() {
        // Root comments are the document header, written once up front.
        return;
    }
    for comment in comments.get(path) {
        push_line(out, indent, comment);
    }
}

/// Text written after `key: ` or `- `. Only meaningful for scalars and
/// empty containers; anything else is rendered as a block.
fn inline_text(value: &SemanticNode) -> &str {
    match value {
        SemanticNode::Scalar(s) => s,
        SemanticNode::Mapping(_) => "{}",
        SemanticNode::Sequence(_) => "[]",
    }
}

fn emit_mapping(
    out: &mut String,
    map: &Mapping,
    comments: &CommentTable,
    indent: usize,
    parent: &KeyPath,
) {
    for (key, value) in map {
        let path = parent.field(key);
        match value {
            SemanticNode::Mapping(child) if !child.is_empty() => {
                push_line(out, indent, &format!("{}:", key));
                emit_mapping(out, child, comments, indent + INDENT_STEP, &path);
            }
            SemanticNode::Sequence(items) if !items.is_empty() => {
                push_line(out, indent, &format!("{}:", key));
                emit_items(out, items, comments, indent + INDENT_STEP, &path);
            }
            _ => {
                let line = format!("{}: {}", key, inline_text(value));
                push_line(out, indent, line.trim_end());
            }
        }
        push_comments(out, comments, indent, &path);
    }
}

/// Write sequence items with their dash at column `dash_indent`.
///
/// A nested block is rendered one level past the dash and its first line's
/// indentation is replaced by `- `, so `- ip: a` is followed by `  path: b`.
fn emit_items(
    out: &mut String,
    items: &[SemanticNode],
    comments: &CommentTable,
    dash_indent: usize,
    parent: &KeyPath,
) {
    let child_indent = dash_indent + INDENT_STEP;
    for (index, item) in items.iter().enumerate() {
        let path = parent.element(index);
        let mut block = String::new();
        match item {
            SemanticNode::Mapping(map) if !map.is_empty() => {
                emit_mapping(&mut block, map, comments, child_indent, &path);
            }
            SemanticNode::Sequence(nested) if !nested.is_empty() => {
                emit_items(&mut block, nested, comments, child_indent, &path);
            }
            _ => {
                let line = format!("- {}", inline_text(item));
                push_line(out, dash_indent, line.trim_end());
            }
        }
        if !block.is_empty() {
            out.push_str(&" ".repeat(dash_indent));
            out.push_str("- ");
            out.push_str(block.get(child_indent..).unwrap_or(&block));
        }
        push_comments(out, comments, child_indent, &path);
    }
}
