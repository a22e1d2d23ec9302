//! Width-aware rendering of layout documents.
//!
//! The renderer walks the document left to right with a work stack of
//! `(indent, mode, doc)` entries. Choices are resolved by a dry-run `fits`
//! scan: the first alternative is simulated flat until the current line
//! ends, overflows the budget, or hits a hard break. Once an alternative is
//! committed, emission happens in document order.
//!
//! Emission invariants:
//! - indentation is written lazily, so blank lines never carry spaces;
//! - a pending space is dropped when a line break arrives instead of text;
//! - table rows are buffered (see [`super::table`]) and flushed by the
//!   first non-row emission;
//! - the renderer never fails: when no alternative fits, the fallback
//!   branch is emitted even past the width budget.

use crate::format::FormatOptions;

use super::table::{PackedRow, TableBuffer, str_width};
use super::{Doc, Row};

/// Layout mode for a region of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

static SPACE: Doc = Doc::Space;

/// Render `doc` to text under the configured width budget.
pub fn render(doc: &Doc, options: &FormatOptions) -> String {
    Renderer::new(options).run(doc)
}

struct Renderer<'a> {
    options: &'a FormatOptions,
    out: String,
    /// Display column of the cursor on the current line.
    col: usize,
    /// Indentation owed to the current line, written when content arrives.
    pending_indent: Option<usize>,
    /// A space owed to the current line, dropped at line breaks.
    pending_space: bool,
    table: TableBuffer,
    /// The previous emission was a buffered row, whose separator newline is
    /// swallowed (flushed rows bring their own).
    just_rowed: bool,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            col: 0,
            pending_indent: None,
            pending_space: false,
            table: TableBuffer::new(),
            just_rowed: false,
        }
    }

    fn run(mut self, doc: &Doc) -> String {
        let mut stack: Vec<(usize, Mode, &Doc)> = vec![(0, Mode::Break, doc)];
        while let Some((indent, mode, doc)) = stack.pop() {
            match doc {
                Doc::Empty => {}
                Doc::Fail => {
                    // Reachable only when a failure escapes every
                    // alternative; emit nothing rather than abort.
                    tracing::warn!("failure document reached the renderer");
                }
                Doc::Text(text) => self.text(text),
                Doc::Space => self.space(),
                Doc::Line => match mode {
                    Mode::Flat => self.space(),
                    Mode::Break => self.newline(indent),
                },
                Doc::HardLine => self.newline(indent),
                Doc::Concat(parts) => {
                    for part in parts.iter().rev() {
                        stack.push((indent, mode, part));
                    }
                }
                Doc::Nest(extra, inner) => stack.push((indent + extra, mode, inner)),
                Doc::Alt(first, second) => {
                    if self.fits(indent, first, &stack) {
                        stack.push((indent, Mode::Flat, first));
                    } else {
                        stack.push((indent, mode, second));
                    }
                }
                Doc::Row(row) => {
                    if self.options.alignment_for(row.kind).is_enabled() {
                        self.push_row(row);
                    } else {
                        // Alignment off: cells joined by single spaces.
                        for (i, cell) in row.cells.iter().enumerate().rev() {
                            stack.push((indent, mode, cell));
                            if i > 0 {
                                stack.push((indent, mode, &SPACE));
                            }
                        }
                    }
                }
            }
        }
        self.finish()
    }

    /// Dry-run check: from the current column, does `candidate` laid out
    /// flat, followed by the pending continuation, fit on this line? The
    /// scan ends at the first break the continuation renders.
    fn fits(&self, indent: usize, candidate: &Doc, rest: &[(usize, Mode, &Doc)]) -> bool {
        let budget = self.options.max_line_width.unwrap_or(usize::MAX);
        let mut col = self.col;
        let mut pending_space = self.pending_space;
        let mut stack = rest.to_vec();
        stack.push((indent, Mode::Flat, candidate));

        while let Some((indent, mode, doc)) = stack.pop() {
            match doc {
                Doc::Empty => {}
                Doc::Fail => return false,
                Doc::Text(text) => {
                    if pending_space {
                        col += 1;
                        pending_space = false;
                    }
                    col += str_width(text);
                    if col > budget {
                        return false;
                    }
                }
                Doc::Space => pending_space = true,
                Doc::Line => match mode {
                    Mode::Flat => pending_space = true,
                    Mode::Break => return true,
                },
                Doc::HardLine => {
                    return match mode {
                        Mode::Flat => false,
                        Mode::Break => true,
                    };
                }
                Doc::Concat(parts) => {
                    for part in parts.iter().rev() {
                        stack.push((indent, mode, part));
                    }
                }
                Doc::Nest(extra, inner) => stack.push((indent + extra, mode, inner)),
                Doc::Alt(first, _) => stack.push((indent, Mode::Flat, first)),
                Doc::Row(row) => match PackedRow::from_row(row) {
                    Some(packed) => {
                        if pending_space {
                            col += 1;
                            pending_space = false;
                        }
                        col += packed.width();
                        if col > budget {
                            return false;
                        }
                    }
                    // A row without a single-line form fails flat layout;
                    // in the continuation it occupies its own line anyway.
                    None => return mode == Mode::Break,
                },
            }
        }
        true
    }

    fn text(&mut self, text: &str) {
        if !self.table.is_empty() {
            self.table.flush(&mut self.out);
            self.just_rowed = false;
        }
        self.write_pending();
        self.out.push_str(text);
        self.col += str_width(text);
    }

    fn space(&mut self) {
        self.pending_space = true;
    }

    fn newline(&mut self, indent: usize) {
        self.pending_space = false;
        if self.just_rowed {
            // Separator after a buffered row; flushed rows end their own
            // lines, so only the upcoming indentation is kept.
            self.just_rowed = false;
            self.pending_indent = Some(indent);
            self.col = indent;
            return;
        }
        if !self.table.is_empty() {
            self.table.flush(&mut self.out);
        }
        self.out.push('\n');
        self.pending_indent = Some(indent);
        self.col = indent;
    }

    /// Buffer an aligned row, or emit it unaligned when some cell has no
    /// single-line form (which also ends the current run).
    fn push_row(&mut self, row: &Row) {
        match PackedRow::from_row(row) {
            Some(packed) => {
                self.table.push(row.kind, packed, &mut self.out);
                self.just_rowed = true;
                self.pending_indent = None;
                self.pending_space = false;
                self.col = 0;
            }
            None => {
                self.table.flush(&mut self.out);
                let mut fragment = String::new();
                for (i, cell) in row.cells.iter().enumerate() {
                    if i > 0 {
                        fragment.push(' ');
                    }
                    fragment.push_str(&render(cell, self.options));
                }
                self.raw(&fragment);
            }
        }
    }

    /// Emit pre-rendered text that may span lines.
    fn raw(&mut self, fragment: &str) {
        self.write_pending();
        self.out.push_str(fragment);
        self.col = match fragment.rsplit_once('\n') {
            Some((_, tail)) => str_width(tail),
            None => self.col + str_width(fragment),
        };
    }

    fn write_pending(&mut self) {
        if let Some(indent) = self.pending_indent.take() {
            for _ in 0..indent {
                self.out.push(' ');
            }
            self.col = indent;
        }
        if self.pending_space {
            self.out.push(' ');
            self.col += 1;
            self.pending_space = false;
        }
    }

    fn finish(mut self) -> String {
        self.table.flush(&mut self.out);
        self.out
    }
}
