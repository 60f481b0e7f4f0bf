//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check variable names can be emitted as `$name: value` declarations
//! - Catch an explicitly supplied but empty source root
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: SassConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the middleware

use std::fmt;

use crate::config::schema::SassConfig;

/// A single semantic configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Variable name cannot be emitted as a `$name: value` declaration.
    InvalidVariableName(String),

    /// `source` was supplied but is empty.
    EmptySource,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidVariableName(name) => {
                write!(f, "invalid variable name: {:?}", name)
            }
            ValidationError::EmptySource => write!(f, "source directory path is empty"),
        }
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &SassConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(source) = &config.source {
        if source.as_os_str().is_empty() {
            errors.push(ValidationError::EmptySource);
        }
    }

    for name in config.variables.keys() {
        if !is_valid_variable_name(name) {
            errors.push(ValidationError::InvalidVariableName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Sass identifiers: ASCII alphanumerics, `-` and `_`, not digit-initial.
fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => return false,
        Some(first) if first.is_ascii_digit() => return false,
        Some(_) => {}
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
