//! Formatting options.

use crate::doc::TableKind;

/// Column alignment behaviour for one table kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Keep every line at its natural width.
    #[default]
    Off,
    /// Pad columns to the widest cell of the run.
    Dynamic,
    /// Pad columns to the widest cell of the run, but at least this many
    /// display columns.
    Fixed(usize),
}

impl Alignment {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// The configured minimum key-column width, if any.
    pub fn min_width(self) -> Option<usize> {
        match self {
            Self::Fixed(width) => Some(width),
            _ => None,
        }
    }
}

/// Formatting options for Talon source files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Number of spaces per indentation level.
    pub indent_size: usize,
    /// Soft target for line width; `None` never breaks for width. Lines
    /// may still exceed the target when a single atom does.
    pub max_line_width: Option<usize>,
    /// Alignment of context-header match lines.
    pub align_match_context: Alignment,
    /// Alignment of single-line command declarations.
    pub align_short_commands: Alignment,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            max_line_width: None,
            align_match_context: Alignment::Off,
            align_short_commands: Alignment::Off,
        }
    }
}

impl FormatOptions {
    /// The alignment choice governing rows of `kind`.
    pub fn alignment_for(&self, kind: TableKind) -> Alignment {
        match kind {
            TableKind::Match => self.align_match_context,
            TableKind::Command => self.align_short_commands,
        }
    }
}
