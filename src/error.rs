//! Error types for the formatting engine.
//!
//! All three categories are fatal for the input being formatted: the driver
//! is expected to report the diagnostic and skip the file. The renderer
//! itself never fails; only translation does.

use text_size::TextRange;
use thiserror::Error;

use crate::syntax::{Node, NodeKind};

/// Result alias for fallible formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that abort formatting of an input tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The tree contains an error node left behind by the parser.
    #[error("parse error at {range:?}: {text}")]
    Parse { text: String, range: TextRange },

    /// A node violated an arity the translator relies on.
    #[error("malformed {parent} node at {range:?}: expected {expected}, found {found}")]
    Structure {
        parent: NodeKind,
        expected: &'static str,
        found: usize,
        range: TextRange,
    },

    /// A node kind appeared in a position the translator does not accept.
    #[error("unexpected {kind} node {context} at {range:?}")]
    UnexpectedKind {
        kind: NodeKind,
        context: &'static str,
        range: TextRange,
    },
}

impl FormatError {
    /// Build a parse error from an error node.
    pub(crate) fn parse(node: &Node) -> Self {
        Self::Parse {
            text: node.text().to_string(),
            range: node.range(),
        }
    }

    /// Build a structural violation for `parent`, which held `found`
    /// non-comment children where `expected` describes the requirement.
    pub(crate) fn structure(parent: &Node, expected: &'static str, found: usize) -> Self {
        Self::Structure {
            parent: parent.kind(),
            expected,
            found,
            range: parent.range(),
        }
    }

    /// Build an unexpected-kind error for `node` in the given position.
    pub(crate) fn unexpected(node: &Node, context: &'static str) -> Self {
        Self::UnexpectedKind {
            kind: node.kind(),
            context,
            range: node.range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Node, NodeKind};

    #[test]
    fn test_parse_error_carries_node_text() {
        let node = Node::leaf(NodeKind::Error, "what is this");
        let err = FormatError::parse(&node);
        let message = err.to_string();
        assert!(message.contains("parse error"));
        assert!(message.contains("what is this"));
    }

    #[test]
    fn test_structure_error_names_parent_kind() {
        let node = Node::new(NodeKind::ParenthesizedExpression, vec![]);
        let err = FormatError::structure(&node, "exactly one inner expression", 0);
        let message = err.to_string();
        assert!(message.contains("parenthesized_expression"));
        assert!(message.contains("exactly one inner expression"));
        assert!(message.contains("found 0"));
    }

    #[test]
    fn test_unexpected_kind_names_position() {
        let node = Node::new(NodeKind::Settings, vec![]);
        let err = FormatError::unexpected(&node, "in a context header");
        let message = err.to_string();
        assert!(message.contains("settings"));
        assert!(message.contains("in a context header"));
    }
}
