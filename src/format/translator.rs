//! Tree-to-document translation.
//!
//! One handler per node kind, dispatched exhaustively. Block-level handlers
//! produce whole lines; inline handlers produce single-line fragments.
//!
//! Comments need special routing because most wrapper nodes allow comment
//! children next to their single semantic child. Instead of threading
//! comment lists through every return value, the translator keeps one
//! buffer: unwrapping helpers push comment siblings into it, and every
//! block-level emission point drains it as preceding lines. The buffer is
//! empty again whenever control returns to the source-file loop, and no
//! comment is ever dropped or reordered.

use crate::doc::{Doc, TableKind};
use crate::error::{FormatError, Result};
use crate::syntax::{Node, NodeKind, collapse_whitespace};

use super::options::{Alignment, FormatOptions};

/// Translates one parsed source file into layout documents.
pub(crate) struct Translator<'a> {
    options: &'a FormatOptions,
    /// Comments met while unwrapping sole-child wrappers, pending emission.
    comments: Vec<&'a Node>,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            comments: Vec::new(),
        }
    }

    /// Translate a source file into its top-level lines: the context header,
    /// the `-` separator (always present, synthesized when the header is
    /// empty), then the body.
    pub(crate) fn source_file(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        if node.kind() != NodeKind::SourceFile {
            return Err(FormatError::unexpected(node, "at the top level"));
        }

        let mut lines = Vec::new();
        let mut in_header = true;
        // Header comments are held back until we know what they precede.
        let mut header_comments: Vec<&'a Node> = Vec::new();

        for child in node.children() {
            match child.kind() {
                NodeKind::Error => return Err(FormatError::parse(child)),
                NodeKind::Comment if in_header => header_comments.push(child),
                NodeKind::Context => {
                    if !in_header {
                        return Err(FormatError::unexpected(child, "in the file body"));
                    }
                    lines.extend(header_comments.drain(..).map(comment_doc));
                    let context_lines = self.block_lines(child)?;
                    lines.extend(context_lines);
                }
                kind => {
                    if in_header && kind.is_body_only() {
                        lines.push(Doc::text("-"));
                        lines.extend(header_comments.drain(..).map(comment_doc));
                        in_header = false;
                    }
                    lines.extend(self.block_lines(child)?);
                }
            }
        }

        if in_header {
            lines.push(Doc::text("-"));
            lines.extend(header_comments.drain(..).map(comment_doc));
        }

        debug_assert!(
            self.comments.is_empty(),
            "comment buffer must drain before returning to the top level"
        );
        Ok(lines)
    }

    /// Translate a block-level node into its lines.
    fn block_lines(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        match node.kind() {
            NodeKind::Comment => Ok(vec![comment_doc(node)]),
            NodeKind::Docstring => Ok(vec![docstring_doc(node)]),
            NodeKind::Context => self.context(node),
            NodeKind::IncludeTag => self.include_tag(node),
            NodeKind::Settings => self.settings(node),
            NodeKind::Command => self.command(node),
            NodeKind::Block => self.block_with_leading(Vec::new(), node),
            NodeKind::Assignment => Ok(vec![self.assignment(node)?]),
            NodeKind::ExpressionStatement => Ok(vec![self.expression_statement(node)?]),
            NodeKind::Match | NodeKind::And | NodeKind::Not | NodeKind::Or => {
                self.match_lines(node, false, false)
            }
            NodeKind::Error => Err(FormatError::parse(node)),
            _ => Err(FormatError::unexpected(node, "at block level")),
        }
    }

    // =========================================================================
    // Context header
    // =========================================================================

    fn context(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        let mut lines = Vec::new();
        for child in node.children() {
            let child_lines = match child.kind() {
                NodeKind::Comment => vec![comment_doc(child)],
                NodeKind::Match | NodeKind::And | NodeKind::Not | NodeKind::Or => {
                    self.match_lines(child, false, false)?
                }
                NodeKind::Error => return Err(FormatError::parse(child)),
                _ => return Err(FormatError::unexpected(child, "in a context header")),
            };
            // Comments buffered while rendering the group surface above it.
            lines.extend(self.drain_comment_lines());
            lines.extend(child_lines);
        }
        Ok(lines)
    }

    /// Translate a match predicate group. `under_and` and `under_not` carry
    /// the keyword prefixes imposed by enclosing combinators onto the
    /// innermost match lines.
    fn match_lines(&mut self, node: &'a Node, under_and: bool, under_not: bool) -> Result<Vec<Doc>> {
        match node.kind() {
            NodeKind::Match => Ok(vec![self.match_line(node, under_and, under_not)?]),
            NodeKind::And => {
                // The first conjunct keeps the incoming prefix; the rest say "and".
                let mut lines = Vec::new();
                let mut under_and = under_and;
                for child in node.children() {
                    if child.kind().is_comment() {
                        lines.push(comment_doc(child));
                    } else {
                        lines.extend(self.match_lines(child, under_and, under_not)?);
                        under_and = true;
                    }
                }
                Ok(lines)
            }
            NodeKind::Not => {
                let mut lines = Vec::new();
                for child in node.children() {
                    if child.kind().is_comment() {
                        lines.push(comment_doc(child));
                    } else {
                        lines.extend(self.match_lines(child, under_and, true)?);
                    }
                }
                Ok(lines)
            }
            NodeKind::Or => {
                // Alternatives render independently; no prefix changes.
                let mut lines = Vec::new();
                for child in node.children() {
                    if child.kind().is_comment() {
                        lines.push(comment_doc(child));
                    } else {
                        let child_lines = self.match_lines(child, under_and, under_not)?;
                        lines.extend(self.drain_comment_lines());
                        lines.extend(child_lines);
                    }
                }
                Ok(lines)
            }
            NodeKind::Error => Err(FormatError::parse(node)),
            _ => Err(FormatError::unexpected(node, "in a match predicate")),
        }
    }

    fn match_line(&mut self, node: &'a Node, under_and: bool, under_not: bool) -> Result<Doc> {
        let semantic = self.semantic_children(node)?;
        if semantic.len() != 2 {
            return Err(FormatError::structure(node, "a key and a pattern", semantic.len()));
        }

        let mut key_parts = Vec::new();
        if under_and {
            key_parts.push(Doc::text("and"));
            key_parts.push(Doc::Space);
        }
        if under_not {
            key_parts.push(Doc::text("not"));
            key_parts.push(Doc::Space);
        }
        key_parts.push(self.inline(semantic[0])?);
        let key = Doc::cat(key_parts).concat(Doc::text(":"));
        let pattern = self.inline(semantic[1])?;

        Ok(match self.options.align_match_context {
            Alignment::Off => key.concat_space(pattern),
            Alignment::Dynamic => Doc::row(TableKind::Match, vec![key, pattern], vec![]),
            Alignment::Fixed(width) => {
                Doc::row(TableKind::Match, vec![key, pattern], vec![width])
            }
        })
    }

    // =========================================================================
    // Body declarations
    // =========================================================================

    fn include_tag(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        let tag = self.sole(node, "exactly one tag name")?;
        let tag_doc = self.inline(tag)?;
        let mut lines = self.drain_comment_lines();
        lines.push(Doc::text("tag():").concat_space(tag_doc));
        Ok(lines)
    }

    fn settings(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        let semantic = self.semantic_children(node)?;
        if semantic.len() != 1 {
            return Err(FormatError::structure(
                node,
                "exactly one settings block",
                semantic.len(),
            ));
        }
        let block = semantic[0];
        if block.kind() != NodeKind::Block {
            return Err(FormatError::unexpected(block, "in a settings declaration"));
        }

        // Pending comments move inside the indented region, ahead of the
        // first setting.
        let leading = std::mem::take(&mut self.comments);
        let body = self.block_with_leading(leading, block)?;
        let doc = Doc::text("settings():").concat(
            Doc::cat([Doc::hardline(), Doc::join(Doc::hardline(), body)])
                .nest(self.options.indent_size),
        );
        Ok(vec![doc])
    }

    fn command(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        let mut rule = None;
        let mut script = None;
        let mut own_comments: Vec<&'a Node> = Vec::new();
        for child in node.children() {
            match child.kind() {
                NodeKind::Rule if rule.is_none() => rule = Some(child),
                NodeKind::Block if script.is_none() => script = Some(child),
                NodeKind::Comment => own_comments.push(child),
                NodeKind::Error => return Err(FormatError::parse(child)),
                _ => return Err(FormatError::unexpected(child, "in a command declaration")),
            }
        }
        let (Some(rule_node), Some(script_node)) = (rule, script) else {
            let found = node.non_comment_children().count();
            return Err(FormatError::structure(node, "a rule and a script block", found));
        };

        // The rule renders first so comments inside it surface above the
        // command line.
        let rule_doc = self.inline(rule_node)?;
        let mut lines = self.drain_comment_lines();

        let is_short = own_comments.is_empty()
            && rule_node.non_comment_children().count() == 1
            && script_node.non_comment_children().count() == 1;

        // Comments on the command itself lead the script block.
        let body = self.block_with_leading(own_comments, script_node)?;
        let single_statement = body.len() == 1;
        let script_doc = Doc::join(Doc::hardline(), body);

        let expanded = Doc::cat([
            rule_doc.clone(),
            Doc::text(":"),
            Doc::cat([Doc::hardline(), script_doc.clone()]).nest(self.options.indent_size),
            Doc::hardline(),
        ]);
        let short = if single_statement {
            self.short_command(rule_doc, script_doc, is_short)
        } else {
            Doc::fail()
        };

        lines.push(short.alt(expanded));
        Ok(lines)
    }

    /// The one-line form of a command. Only rows produced for short
    /// commands take part in alignment; other one-liners are plain text
    /// and end any active run.
    fn short_command(&self, rule: Doc, statement: Doc, is_short: bool) -> Doc {
        let key = rule.concat(Doc::text(":"));
        if !is_short {
            return key.concat_space(statement);
        }
        match self.options.align_short_commands {
            Alignment::Off => key.concat_space(statement),
            Alignment::Dynamic => Doc::row(TableKind::Command, vec![key, statement], vec![]),
            Alignment::Fixed(width) => {
                Doc::row(TableKind::Command, vec![key, statement], vec![width])
            }
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn block_with_leading(&mut self, leading: Vec<&'a Node>, block: &'a Node) -> Result<Vec<Doc>> {
        let mut lines: Vec<Doc> = leading.into_iter().map(comment_doc).collect();
        for child in block.children() {
            let child_lines = self.block_lines(child)?;
            lines.extend(self.drain_comment_lines());
            lines.extend(child_lines);
        }
        Ok(lines)
    }

    fn assignment(&mut self, node: &'a Node) -> Result<Doc> {
        let semantic = self.semantic_children(node)?;
        if semantic.len() != 2 {
            return Err(FormatError::structure(node, "a target and a value", semantic.len()));
        }
        Ok(self
            .inline(semantic[0])?
            .concat_space(Doc::text("="))
            .concat_space(self.inline(semantic[1])?))
    }

    fn expression_statement(&mut self, node: &'a Node) -> Result<Doc> {
        let expression = self.sole(node, "exactly one expression")?;
        self.inline(expression)
    }

    // =========================================================================
    // Expressions and rules
    // =========================================================================

    /// Translate an expression or rule element into a single-line fragment.
    fn inline(&mut self, node: &'a Node) -> Result<Doc> {
        match node.kind() {
            NodeKind::Action => {
                let semantic = self.semantic_children(node)?;
                if semantic.len() != 2 {
                    return Err(FormatError::structure(
                        node,
                        "an action name and an argument list",
                        semantic.len(),
                    ));
                }
                Ok(self
                    .inline(semantic[0])?
                    .concat(self.inline(semantic[1])?.parens()))
            }
            NodeKind::KeyAction => self.builtin_action(node, "key"),
            NodeKind::SleepAction => self.builtin_action(node, "sleep"),
            NodeKind::ArgumentList => {
                let items = self.inline_children(node)?;
                Ok(Doc::join(Doc::text(",").concat(Doc::Space), items))
            }
            NodeKind::BinaryOperator => {
                let semantic = self.semantic_children(node)?;
                if semantic.len() != 3 {
                    return Err(FormatError::structure(
                        node,
                        "two operands around an operator",
                        semantic.len(),
                    ));
                }
                let parts: Result<Vec<Doc>> =
                    semantic.into_iter().map(|child| self.inline(child)).collect();
                Ok(Doc::join(Doc::Space, parts?))
            }
            NodeKind::ParenthesizedExpression => {
                let inner = self.sole(node, "exactly one inner expression")?;
                Ok(self.inline(inner)?.parens())
            }
            NodeKind::Variable => {
                let name = self.sole(node, "exactly one variable name")?;
                self.inline(name)
            }
            NodeKind::Identifier | NodeKind::Operator | NodeKind::Word => {
                Ok(Doc::text(collapse_whitespace(node.text())))
            }
            NodeKind::Integer | NodeKind::Float | NodeKind::ImplicitString => {
                Ok(Doc::text(collapse_whitespace(node.text().trim())))
            }
            NodeKind::Number => {
                let inner = self.sole(node, "exactly one literal")?;
                self.inline(inner)
            }
            NodeKind::String => {
                let parts = self.inline_children(node)?;
                Ok(Doc::cat(parts).double_quote())
            }
            NodeKind::StringContent | NodeKind::StringEscapeSequence => {
                Ok(Doc::text(node.text()))
            }
            NodeKind::Interpolation => {
                // Braces come from the sibling string content pieces.
                let inner = self.sole(node, "exactly one interpolated expression")?;
                self.inline(inner)
            }
            NodeKind::RegexEscapeSequence => {
                let parts = self.inline_children(node)?;
                Ok(Doc::cat(parts).braces())
            }
            NodeKind::Capture => {
                let name = self.sole(node, "exactly one capture name")?;
                Ok(self.inline(name)?.angles())
            }
            NodeKind::List => {
                let name = self.sole(node, "exactly one list name")?;
                Ok(self.inline(name)?.braces())
            }
            NodeKind::Choice => {
                let items = self.inline_children(node)?;
                Ok(Doc::join(
                    Doc::cat([Doc::Space, Doc::text("|"), Doc::Space]),
                    items,
                ))
            }
            NodeKind::Optional => {
                let inner = self.sole(node, "exactly one inner rule")?;
                Ok(self.inline(inner)?.brackets())
            }
            NodeKind::ParenthesizedRule => {
                let inner = self.sole(node, "exactly one inner rule")?;
                Ok(self.inline(inner)?.parens())
            }
            NodeKind::Repeat => {
                let inner = self.sole(node, "exactly one repeated rule")?;
                Ok(self.inline(inner)?.concat(Doc::text("*")))
            }
            NodeKind::Repeat1 => {
                let inner = self.sole(node, "exactly one repeated rule")?;
                Ok(self.inline(inner)?.concat(Doc::text("+")))
            }
            NodeKind::StartAnchor => Ok(Doc::text("^")),
            NodeKind::EndAnchor => Ok(Doc::text("$")),
            NodeKind::Rule => {
                let parts = self.inline_children(node)?;
                Ok(Doc::cat(parts))
            }
            NodeKind::Seq => {
                let items = self.inline_children(node)?;
                Ok(Doc::join(Doc::Space, items))
            }
            NodeKind::Error => Err(FormatError::parse(node)),
            _ => Err(FormatError::unexpected(node, "in an expression")),
        }
    }

    fn builtin_action(&mut self, node: &'a Node, name: &'static str) -> Result<Doc> {
        let arguments = self.sole(node, "exactly one argument list")?;
        Ok(Doc::text(name).concat(self.inline(arguments)?.parens()))
    }

    // =========================================================================
    // Comment plumbing
    // =========================================================================

    /// Non-comment children in order; comment siblings go to the buffer.
    fn semantic_children(&mut self, node: &'a Node) -> Result<Vec<&'a Node>> {
        let mut semantic = Vec::new();
        for child in node.children() {
            match child.kind() {
                NodeKind::Comment => self.comments.push(child),
                NodeKind::Error => return Err(FormatError::parse(child)),
                _ => semantic.push(child),
            }
        }
        Ok(semantic)
    }

    /// The unique non-comment child of a wrapper node.
    fn sole(&mut self, node: &'a Node, expected: &'static str) -> Result<&'a Node> {
        let semantic = self.semantic_children(node)?;
        if semantic.len() == 1 {
            Ok(semantic[0])
        } else {
            Err(FormatError::structure(node, expected, semantic.len()))
        }
    }

    /// Translate non-comment children in order, buffering comment siblings.
    fn inline_children(&mut self, node: &'a Node) -> Result<Vec<Doc>> {
        let semantic = self.semantic_children(node)?;
        semantic
            .into_iter()
            .map(|child| self.inline(child))
            .collect()
    }

    /// Drain buffered comments as their own lines, oldest first.
    fn drain_comment_lines(&mut self) -> Vec<Doc> {
        self.comments.drain(..).map(comment_doc).collect()
    }
}

/// `#` plus the comment text with its leading hashes stripped; interior
/// whitespace survives untouched.
fn comment_doc(node: &Node) -> Doc {
    let body = node.text().trim_start_matches('#').trim_end();
    Doc::text(format!("#{body}"))
}

fn docstring_doc(node: &Node) -> Doc {
    let body = node.text().trim_start_matches('#').trim_end();
    Doc::text(format!("###{body}"))
}
