//! # talonfmt
//!
//! Canonicalizing formatter for Talon voice-command files.
//!
//! An external parser produces a typed AST; this crate turns that tree into
//! normalized text. The pipeline is a Wadler-style pretty-printer extended
//! with tabular alignment: a translator walks the AST and emits a layout
//! document encoding the possible renderings, and a width-aware renderer
//! picks among them, optionally padding runs of similar lines into columns.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! format    → translator, options, formatting facade
//!   ↓
//! doc       → layout document IR, renderer, table packer
//!   ↓
//! syntax    → node model handed over by the external parser
//!   ↓
//! error     → fatal diagnostics
//! ```
//!
//! Formatting is synchronous and free of I/O; concurrent calls on disjoint
//! inputs are safe because all mutable state lives inside a single call.

/// Fatal diagnostics: parse errors, structural violations, unexpected kinds
pub mod error;

/// Talon AST node model: kinds, nodes, equivalence helpers
pub mod syntax;

/// Layout document IR, width-aware renderer, table packer
pub mod doc;

/// Translation from AST to documents, options, formatting facade
pub mod format;

pub use error::FormatError;
pub use format::{Alignment, FormatOptions, format};
pub use syntax::{Node, NodeKind};
