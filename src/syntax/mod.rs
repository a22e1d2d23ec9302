//! Talon AST node model.
//!
//! The formatting engine does not parse. An external parser hands over an
//! owned tree of [`Node`]s; each node carries its [`NodeKind`], the raw
//! source text for leaves, a byte range, and ordered children. This module
//! is the contract between that parser and the engine, plus the equivalence
//! helpers drivers use to compare a reparsed output against the input tree.

mod kind;

pub use kind::NodeKind;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// A node of the parsed source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    text: SmolStr,
    range: TextRange,
    children: Vec<Node>,
}

impl Node {
    /// Create an interior node. The range spans the children.
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        let range = match (children.first(), children.last()) {
            (Some(first), Some(last)) => TextRange::new(first.range.start(), last.range.end()),
            _ => TextRange::empty(TextSize::new(0)),
        };
        Self {
            kind,
            text: SmolStr::default(),
            range,
            children,
        }
    }

    /// Create a leaf node carrying raw source text.
    pub fn leaf(kind: NodeKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
            range: TextRange::empty(TextSize::new(0)),
            children: Vec::new(),
        }
    }

    /// Attach the source byte range reported by the parser.
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Children that are not comments, in source order.
    pub fn non_comment_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| !c.kind.is_comment())
    }

    /// Find the first error node anywhere in this subtree.
    pub fn find_error(&self) -> Option<&Node> {
        if self.kind == NodeKind::Error {
            return Some(self);
        }
        self.children.iter().find_map(Node::find_error)
    }

    /// Check whether this subtree contains an error node.
    pub fn contains_error(&self) -> bool {
        self.find_error().is_some()
    }

    /// Structural equivalence, for comparing a reparsed formatter output
    /// against the original tree.
    ///
    /// Kinds must match and children must be pairwise equivalent. Leaf text
    /// is normalized per kind: comments and docstrings compare after
    /// collapsing whitespace runs, implicit strings after trimming, and all
    /// other leaves by raw text.
    pub fn equivalent(&self, other: &Node) -> bool {
        if self.kind != other.kind {
            return false;
        }
        let text_matches = match self.kind {
            NodeKind::Comment | NodeKind::Docstring => {
                collapse_whitespace(&self.text) == collapse_whitespace(&other.text)
            }
            NodeKind::ImplicitString => self.text.trim() == other.text.trim(),
            _ => self.text == other.text,
        };
        text_matches
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.equivalent(b))
    }
}

/// Replace every run of whitespace with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
