//! Shared tree builders and fixtures for the integration suites.

#![allow(dead_code)]

use once_cell::sync::Lazy;

use talonfmt::{Node, NodeKind};

pub fn source(children: Vec<Node>) -> Node {
    Node::new(NodeKind::SourceFile, children)
}

pub fn word(text: &str) -> Node {
    Node::leaf(NodeKind::Word, text)
}

pub fn ident(text: &str) -> Node {
    Node::leaf(NodeKind::Identifier, text)
}

pub fn implicit(text: &str) -> Node {
    Node::leaf(NodeKind::ImplicitString, text)
}

pub fn comment(text: &str) -> Node {
    Node::leaf(NodeKind::Comment, text)
}

/// A rule from space-separated words: a single word stays bare, several
/// words become one sequence child.
pub fn rule(text: &str) -> Node {
    let words: Vec<Node> = text.split_whitespace().map(word).collect();
    if words.len() == 1 {
        Node::new(NodeKind::Rule, words)
    } else {
        Node::new(NodeKind::Rule, vec![Node::new(NodeKind::Seq, words)])
    }
}

pub fn action(name: &str, arguments: Vec<Node>) -> Node {
    Node::new(
        NodeKind::Action,
        vec![ident(name), Node::new(NodeKind::ArgumentList, arguments)],
    )
}

pub fn call_statement(name: &str) -> Node {
    Node::new(NodeKind::ExpressionStatement, vec![action(name, vec![])])
}

pub fn block(statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Block, statements)
}

pub fn command(rule_text: &str, statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Command, vec![rule(rule_text), block(statements)])
}

pub fn match_pred(key: &str, pattern: &str) -> Node {
    Node::new(NodeKind::Match, vec![ident(key), implicit(pattern)])
}

pub fn context(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Context, children)
}

pub fn assignment(target: &str, value: &str) -> Node {
    Node::new(
        NodeKind::Assignment,
        vec![
            ident(target),
            Node::new(NodeKind::Number, vec![Node::leaf(NodeKind::Float, value)]),
        ],
    )
}

pub fn settings(statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Settings, vec![block(statements)])
}

pub fn include_tag(name: &str) -> Node {
    Node::new(NodeKind::IncludeTag, vec![ident(name)])
}

/// A representative source file touching the header, the separator, tag
/// includes, settings, short commands, and an expanded command.
pub static EDITOR_FILE: Lazy<Node> = Lazy::new(|| {
    source(vec![
        comment("# Editor voice commands"),
        context(vec![Node::new(
            NodeKind::And,
            vec![match_pred("app", "code"), match_pred("mode", "command")],
        )]),
        include_tag("user.editing"),
        settings(vec![assignment("imgui.scale", "1.3")]),
        command("foo", vec![call_statement("a")]),
        command("foobar", vec![call_statement("b")]),
        comment("# multi-step"),
        command(
            "slurp that",
            vec![call_statement("edit.extend_right"), call_statement("edit.cut")],
        ),
    ])
});
