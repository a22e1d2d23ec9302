//! Formatter unit tests.
//!
//! Trees are built by hand with the small constructors below; the external
//! parser is not part of this crate.


use crate::syntax::{Node, NodeKind};

use super::FormatOptions;

pub(crate) fn source(children: Vec<Node>) -> Node {
    Node::new(NodeKind::SourceFile, children)
}

pub(crate) fn word(text: &str) -> Node {
    Node::leaf(NodeKind::Word, text)
}

pub(crate) fn ident(text: &str) -> Node {
    Node::leaf(NodeKind::Identifier, text)
}

pub(crate) fn implicit(text: &str) -> Node {
    Node::leaf(NodeKind::ImplicitString, text)
}

pub(crate) fn comment(text: &str) -> Node {
    Node::leaf(NodeKind::Comment, text)
}

/// A rule from space-separated words: a single word stays bare, several
/// words become one sequence child.
pub(crate) fn rule(text: &str) -> Node {
    let words: Vec<Node> = text.split_whitespace().map(word).collect();
    if words.len() == 1 {
        Node::new(NodeKind::Rule, words)
    } else {
        Node::new(NodeKind::Rule, vec![Node::new(NodeKind::Seq, words)])
    }
}

pub(crate) fn action(name: &str, arguments: Vec<Node>) -> Node {
    Node::new(
        NodeKind::Action,
        vec![ident(name), Node::new(NodeKind::ArgumentList, arguments)],
    )
}

/// An argument-less action call wrapped as a statement.
pub(crate) fn call_statement(name: &str) -> Node {
    Node::new(NodeKind::ExpressionStatement, vec![action(name, vec![])])
}

pub(crate) fn block(statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Block, statements)
}

pub(crate) fn command(rule_text: &str, statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Command, vec![rule(rule_text), block(statements)])
}

pub(crate) fn match_pred(key: &str, pattern: &str) -> Node {
    Node::new(NodeKind::Match, vec![ident(key), implicit(pattern)])
}

pub(crate) fn context(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Context, children)
}

pub(crate) fn formatted(root: &Node, options: &FormatOptions) -> String {
    super::format(root, options).expect("formatting should succeed")
}
