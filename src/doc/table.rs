//! Table packing: column alignment for runs of tagged rows.
//!
//! The renderer buffers consecutive rows of one [`TableKind`] here instead
//! of writing them out. When anything else is emitted the run is flushed:
//! each column is sized to its widest cell (or the configured minimum),
//! every cell but the last is right-padded, and cells are joined by one
//! space. Alignment is purely visual; rows keep their own line each.

use unicode_width::UnicodeWidthStr;

use super::{Doc, Row, TableKind};

/// Display width of rendered text.
pub(super) fn str_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Render a document on a single line: soft breaks and spaces become one
/// space each, choices contribute their flat branch, nesting is dropped.
/// Returns `None` when the document contains a hard break or a failure and
/// therefore has no single-line form.
pub(super) fn flat_text(doc: &Doc) -> Option<String> {
    let mut out = String::new();
    let mut stack: Vec<&Doc> = vec![doc];
    while let Some(doc) = stack.pop() {
        match doc {
            Doc::Empty => {}
            Doc::Fail | Doc::HardLine => return None,
            Doc::Text(text) => out.push_str(text),
            Doc::Space | Doc::Line => out.push(' '),
            Doc::Concat(parts) => stack.extend(parts.iter().rev()),
            Doc::Nest(_, inner) => stack.push(inner),
            Doc::Alt(first, _) => stack.push(first),
            Doc::Row(row) => {
                for (i, cell) in row.cells.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&flat_text(cell)?);
                }
            }
        }
    }
    Some(out)
}

/// A row whose cells have been rendered to text, ready for sizing.
pub(super) struct PackedRow {
    cells: Vec<String>,
    min_col_widths: Vec<usize>,
}

impl PackedRow {
    /// Render every cell of `row` flat. `None` when some cell has no
    /// single-line form; such a row cannot take part in alignment.
    pub(super) fn from_row(row: &Row) -> Option<PackedRow> {
        let cells = row
            .cells
            .iter()
            .map(flat_text)
            .collect::<Option<Vec<String>>>()?;
        Some(PackedRow {
            cells,
            min_col_widths: row.min_col_widths.clone(),
        })
    }

    /// Single-line width of this row on its own: padded columns, one space
    /// between cells, last cell unpadded.
    pub(super) fn width(&self) -> usize {
        let last = self.cells.len().saturating_sub(1);
        let mut total = 0;
        for (i, cell) in self.cells.iter().enumerate() {
            let mut width = str_width(cell);
            if i < last {
                if let Some(min) = self.min_col_widths.get(i) {
                    width = width.max(*min);
                }
                total += width + 1;
            } else {
                total += width;
            }
        }
        total
    }
}

/// Buffer for the alignment run currently being collected.
pub(super) struct TableBuffer {
    kind: Option<TableKind>,
    rows: Vec<PackedRow>,
}

impl TableBuffer {
    pub(super) fn new() -> Self {
        Self {
            kind: None,
            rows: Vec::new(),
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add a row to the run, flushing first when the kind changes.
    pub(super) fn push(&mut self, kind: TableKind, row: PackedRow, out: &mut String) {
        if self.kind != Some(kind) {
            self.flush(out);
        }
        self.kind = Some(kind);
        self.rows.push(row);
    }

    /// Write out the buffered run as padded lines, one trailing newline per
    /// row, and reset.
    pub(super) fn flush(&mut self, out: &mut String) {
        if self.rows.is_empty() {
            self.kind = None;
            return;
        }
        tracing::trace!(
            kind = self.kind.map(TableKind::as_str),
            rows = self.rows.len(),
            "flushing alignment run"
        );

        let columns = self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i] = widths[i].max(str_width(cell));
            }
            for (i, min) in row.min_col_widths.iter().enumerate() {
                if i < columns {
                    widths[i] = widths[i].max(*min);
                }
            }
        }

        for row in self.rows.drain(..) {
            let last = row.cells.len().saturating_sub(1);
            for (i, cell) in row.cells.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(cell);
                if i < last {
                    for _ in str_width(cell)..widths[i] {
                        out.push(' ');
                    }
                }
            }
            out.push('\n');
        }
        self.kind = None;
    }
}
