//! Layout document IR.
//!
//! A [`Doc`] describes every rendering a piece of output may take; the
//! renderer in [`render`] picks one under the configured width budget. The
//! only source of branching is [`Doc::Alt`]; everything else is plain
//! concatenation, indentation, and line-break atoms. Construction is pure:
//! combinators never share mutable state, so documents can be built once
//! and rendered from any thread.

mod render;
mod table;

pub use render::render;

use smol_str::SmolStr;

/// Which alignment group a table row participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Context-header match lines (`key: pattern`).
    Match,
    /// Single-line command declarations (`rule: statement`).
    Command,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Command => "command",
        }
    }
}

/// A table row: cells padded into columns shared with adjacent rows of the
/// same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: TableKind,
    pub cells: Vec<Doc>,
    /// Per-column minimum widths, index-aligned with `cells`. May be shorter
    /// than `cells`; missing entries mean no minimum.
    pub min_col_widths: Vec<usize>,
}

/// A layout document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Renders nothing.
    Empty,
    /// An alternative that can never be chosen.
    Fail,
    /// Literal text. Must not contain line breaks.
    Text(SmolStr),
    /// A single space, absorbed when a line break follows directly.
    Space,
    /// Soft break: newline plus indent, or a space in flat layout.
    Line,
    /// Unconditional break. Fails any enclosing flat layout.
    HardLine,
    /// Concatenation, left to right.
    Concat(Vec<Doc>),
    /// Adds to the indentation while rendering the inner document.
    Nest(usize, Box<Doc>),
    /// Left-biased choice: the first alternative that fits wins, and
    /// [`Doc::Fail`] is never chosen.
    Alt(Box<Doc>, Box<Doc>),
    /// A table row; see [`TableKind`].
    Row(Row),
}

impl Doc {
    pub fn nil() -> Doc {
        Doc::Empty
    }

    pub fn fail() -> Doc {
        Doc::Fail
    }

    pub fn space() -> Doc {
        Doc::Space
    }

    pub fn line() -> Doc {
        Doc::Line
    }

    pub fn hardline() -> Doc {
        Doc::HardLine
    }

    /// A text atom. `text` must not contain `\n`; callers split multi-line
    /// content into atoms joined by [`Doc::hardline`].
    pub fn text(text: impl Into<SmolStr>) -> Doc {
        let text = text.into();
        debug_assert!(!text.contains('\n'), "text atoms must not contain newlines");
        Doc::Text(text)
    }

    /// Concatenate documents, flattening nested concatenations and dropping
    /// empty ones.
    pub fn cat(docs: impl IntoIterator<Item = Doc>) -> Doc {
        let mut parts = Vec::new();
        for doc in docs {
            match doc {
                Doc::Empty => {}
                Doc::Concat(inner) => parts.extend(inner),
                other => parts.push(other),
            }
        }
        match parts.len() {
            0 => Doc::Empty,
            1 => parts.into_iter().next().unwrap_or(Doc::Empty),
            _ => Doc::Concat(parts),
        }
    }

    /// Concatenate `docs` with `separator` between adjacent items.
    pub fn join(separator: Doc, docs: impl IntoIterator<Item = Doc>) -> Doc {
        let mut parts = Vec::new();
        for (i, doc) in docs.into_iter().enumerate() {
            if i > 0 {
                parts.push(separator.clone());
            }
            parts.push(doc);
        }
        Doc::cat(parts)
    }

    /// A table row. `min_col_widths` may be empty or shorter than `cells`.
    pub fn row(kind: TableKind, cells: Vec<Doc>, min_col_widths: Vec<usize>) -> Doc {
        Doc::Row(Row {
            kind,
            cells,
            min_col_widths,
        })
    }

    /// `self` followed by `other`.
    pub fn concat(self, other: Doc) -> Doc {
        Doc::cat([self, other])
    }

    /// `self` followed by a space and `other`.
    pub fn concat_space(self, other: Doc) -> Doc {
        Doc::cat([self, Doc::Space, other])
    }

    /// Indent inner line breaks by `indent` additional columns.
    pub fn nest(self, indent: usize) -> Doc {
        Doc::Nest(indent, Box::new(self))
    }

    /// Prefer `self`, falling back to `other` when `self` does not fit.
    pub fn alt(self, other: Doc) -> Doc {
        Doc::Alt(Box::new(self), Box::new(other))
    }

    /// Try to render `self` on a single line, falling back to the original
    /// layout: `alt(flatten(self), self)`.
    pub fn group(self) -> Doc {
        self.flatten().alt(self)
    }

    pub fn parens(self) -> Doc {
        Doc::cat([Doc::text("("), self, Doc::text(")")])
    }

    pub fn brackets(self) -> Doc {
        Doc::cat([Doc::text("["), self, Doc::text("]")])
    }

    pub fn braces(self) -> Doc {
        Doc::cat([Doc::text("{"), self, Doc::text("}")])
    }

    pub fn angles(self) -> Doc {
        Doc::cat([Doc::text("<"), self, Doc::text(">")])
    }

    pub fn double_quote(self) -> Doc {
        Doc::cat([Doc::text("\""), self, Doc::text("\"")])
    }

    /// Single-line variant: soft breaks become spaces, indentation is
    /// dropped, the first branch of every choice is taken. Hard breaks
    /// survive and make the flat layout unfit.
    pub fn flatten(&self) -> Doc {
        match self {
            Doc::Empty | Doc::Fail | Doc::Text(_) | Doc::Space | Doc::HardLine => self.clone(),
            Doc::Line => Doc::Space,
            Doc::Concat(parts) => Doc::cat(parts.iter().map(Doc::flatten)),
            Doc::Nest(_, inner) => inner.flatten(),
            Doc::Alt(first, _) => first.flatten(),
            Doc::Row(_) => self.clone(),
        }
    }
}
