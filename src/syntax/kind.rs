//! Node kinds for the Talon AST.

use std::fmt;

/// All node kinds produced by the external Talon parser.
///
/// The translator dispatches on this enum exhaustively; a kind that shows up
/// in a position it cannot occupy is a fatal error, never silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    // === Structure ===
    SourceFile,
    Context,
    Match,
    And,
    Not,
    Or,

    // === Body declarations ===
    IncludeTag,
    Settings,
    Command,
    Block,
    Assignment,
    ExpressionStatement,

    // === Expressions ===
    Action,
    KeyAction,
    SleepAction,
    ArgumentList,
    BinaryOperator,
    ParenthesizedExpression,
    Variable,
    Identifier,
    Operator,
    Number,
    Integer,
    Float,

    // === Strings ===
    String,
    StringContent,
    StringEscapeSequence,
    Interpolation,
    ImplicitString,
    RegexEscapeSequence,

    // === Rules ===
    Rule,
    Seq,
    Choice,
    Optional,
    Repeat,
    Repeat1,
    ParenthesizedRule,
    Capture,
    List,
    StartAnchor,
    EndAnchor,
    Word,

    // === Trivia ===
    Comment,
    Docstring,

    // === Special ===
    Error,
}

impl NodeKind {
    /// Check if this kind is a comment (docstrings are block-level content,
    /// not buffered trivia).
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment)
    }

    /// Kinds that may only appear in the file body, after the `-` separator.
    pub fn is_body_only(self) -> bool {
        matches!(self, Self::IncludeTag | Self::Settings | Self::Command)
    }

    /// Kinds that combine or negate match predicates in the context header.
    pub fn is_match_combinator(self) -> bool {
        matches!(self, Self::And | Self::Not | Self::Or)
    }

    /// Grammar name of this kind, as used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceFile => "source_file",
            Self::Context => "context",
            Self::Match => "match",
            Self::And => "and",
            Self::Not => "not",
            Self::Or => "or",
            Self::IncludeTag => "include_tag",
            Self::Settings => "settings",
            Self::Command => "command",
            Self::Block => "block",
            Self::Assignment => "assignment",
            Self::ExpressionStatement => "expression_statement",
            Self::Action => "action",
            Self::KeyAction => "key_action",
            Self::SleepAction => "sleep_action",
            Self::ArgumentList => "argument_list",
            Self::BinaryOperator => "binary_operator",
            Self::ParenthesizedExpression => "parenthesized_expression",
            Self::Variable => "variable",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::StringContent => "string_content",
            Self::StringEscapeSequence => "string_escape_sequence",
            Self::Interpolation => "interpolation",
            Self::ImplicitString => "implicit_string",
            Self::RegexEscapeSequence => "regex_escape_sequence",
            Self::Rule => "rule",
            Self::Seq => "seq",
            Self::Choice => "choice",
            Self::Optional => "optional",
            Self::Repeat => "repeat",
            Self::Repeat1 => "repeat1",
            Self::ParenthesizedRule => "parenthesized_rule",
            Self::Capture => "capture",
            Self::List => "list",
            Self::StartAnchor => "start_anchor",
            Self::EndAnchor => "end_anchor",
            Self::Word => "word",
            Self::Comment => "comment",
            Self::Docstring => "docstring",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
