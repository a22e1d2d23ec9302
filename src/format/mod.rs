//! Formatting pipeline: options, translation, and the public facade.

mod options;
mod translator;

#[cfg(test)]
mod tests;

pub use options::{Alignment, FormatOptions};

use crate::doc::{self, Doc};
use crate::error::{FormatError, Result};
use crate::syntax::Node;

use translator::Translator;

/// Format a parsed source file into its canonical text.
///
/// The output uses `\n` separators and ends with a trailing newline. The
/// tree must be free of error nodes; see [`crate::error`] for the failure
/// taxonomy. Rendering itself never fails: lines that cannot be broken
/// are emitted past the width budget.
pub fn format(root: &Node, options: &FormatOptions) -> Result<String> {
    if let Some(error) = root.find_error() {
        return Err(FormatError::parse(error));
    }

    let mut translator = Translator::new(options);
    let lines = translator.source_file(root)?;
    tracing::debug!(lines = lines.len(), "translated source file");

    let doc = Doc::join(Doc::hardline(), lines);
    let mut text = doc::render(&doc, options);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
