//! Configuration schema definitions.
//!
//! The middleware is configured once at construction and is immutable
//! afterwards. Every field has a default so a host can deserialize a
//! minimal TOML fragment or build the struct directly.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::compiler::Diagnostics;

/// Stylesheet syntax dialect.
///
/// Selects the source file extension, the default source directory name,
/// and whether prepended variable declarations are semicolon-terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Syntax {
    /// Indentation-sensitive syntax (`.sass` files).
    #[default]
    Sass,

    /// Brace/semicolon-delimited syntax (`.scss` files).
    Scss,
}

impl Syntax {
    /// Normalize a mode string. Anything other than `"scss"` is [`Syntax::Sass`].
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "scss" => Syntax::Scss,
            _ => Syntax::Sass,
        }
    }

    /// Source file extension for this dialect.
    pub fn extension(self) -> &'static str {
        match self {
            Syntax::Sass => ".sass",
            Syntax::Scss => ".scss",
        }
    }

    /// Directory name used when no source root is configured.
    pub fn dir_name(self) -> &'static str {
        match self {
            Syntax::Sass => "sass",
            Syntax::Scss => "scss",
        }
    }

    /// Whether the compiler should parse indentation-sensitive syntax.
    pub fn is_indented(self) -> bool {
        matches!(self, Syntax::Sass)
    }

    /// Terminator for a prepended variable declaration line.
    pub fn declaration_terminator(self) -> &'static str {
        match self {
            Syntax::Sass => "",
            Syntax::Scss => ";",
        }
    }
}

impl From<String> for Syntax {
    fn from(mode: String) -> Self {
        Syntax::from_mode(&mode)
    }
}

/// Root configuration for the stylesheet middleware.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SassConfig {
    /// Stylesheet source root.
    ///
    /// Defaults to `./sass` or `./scss` (named after the resolved mode),
    /// relative to the process working directory.
    pub source: Option<PathBuf>,

    /// Syntax dialect; unrecognized mode strings fall back to `sass`.
    pub mode: Syntax,

    /// Variables prepended to every compiled file as `$name: value`
    /// declarations. Ordered map, so the generated prelude is deterministic.
    pub variables: BTreeMap<String, String>,

    /// Always emit compressed output, regardless of the request path.
    pub force_minified: bool,

    /// Serve partial files (leading underscore) on direct request.
    pub expose_partials: bool,

    /// Consult the cache on reads.
    ///
    /// Unset, this resolves from the environment: reads are enabled only
    /// when `APP_ENV=production`. Compiled output is written to the cache
    /// either way.
    pub cache: Option<bool>,

    /// Sinks for `@debug`/`@warn` messages and compiler errors.
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

impl SassConfig {
    /// Resolve the effective source root.
    pub fn source_root(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode.dir_name()))
    }

    /// Resolve the effective cache-read gate.
    pub fn cache_reads(&self) -> bool {
        self.cache.unwrap_or_else(production_env)
    }
}

/// Whether the process environment flags a production-like deployment.
fn production_env() -> bool {
    std::env::var("APP_ENV")
        .map(|value| value == "production")
        .unwrap_or(false)
}
