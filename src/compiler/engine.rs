//! Compiler invocation.
//!
//! Thin adapter over the `grass` compiler: builds the variable prelude,
//! wires the diagnostic logger, and maps dialect and output options.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compiler::diagnostics::{CompilerLogger, Diagnostics};
use crate::compiler::resolver::OutputStyle;
use crate::config::Syntax;

/// Errors surfaced while turning a stylesheet source into CSS.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source file was found but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler rejected the stylesheet (includes `@error` calls).
    #[error("sass compilation failed: {0}")]
    Sass(#[from] Box<grass::Error>),
}

/// Build the variable declaration block prepended to every source file.
///
/// One line per entry, `$name: value`, semicolon-terminated only in the
/// SCSS dialect.
pub fn variable_prelude(variables: &BTreeMap<String, String>, mode: Syntax) -> String {
    let terminator = mode.declaration_terminator();
    let mut prelude = String::new();
    for (name, value) in variables {
        prelude.push_str(&format!("${name}: {value}{terminator}\n"));
    }
    prelude
}

/// Compile stylesheet text to CSS.
///
/// `load_path` is the source root, so `@use`/`@import` references resolve
/// against it. `@debug`/`@warn` messages are routed to `diagnostics`; a
/// compile failure is reported to the error sink before being returned.
pub fn compile(
    input: String,
    load_path: &Path,
    mode: Syntax,
    style: OutputStyle,
    diagnostics: &Diagnostics,
) -> Result<String, CompileError> {
    let logger = CompilerLogger::new(diagnostics);
    let options = grass::Options::default()
        .style(style.to_grass())
        .load_path(load_path)
        .input_syntax(if mode.is_indented() {
            grass::InputSyntax::Sass
        } else {
            grass::InputSyntax::Scss
        })
        .logger(&logger);

    grass::from_string(input, &options).map_err(|err| {
        diagnostics.error(&err.to_string());
        CompileError::Sass(err)
    })
}
