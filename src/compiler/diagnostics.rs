//! Diagnostic message routing.
//!
//! Stylesheets can emit `@debug` and `@warn` messages during compilation;
//! `@error` aborts it with a compiler error. Each channel has an optional
//! handler slot, resolved once at construction; unset slots fall back to
//! the matching `tracing` level.

use std::fmt;
use std::sync::Arc;

use codemap::SpanLoc;

/// Handler for a single diagnostic channel.
pub type DiagnosticFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Sinks for compiler diagnostic messages.
#[derive(Clone, Default)]
pub struct Diagnostics {
    debug: Option<DiagnosticFn>,
    warn: Option<DiagnosticFn>,
    error: Option<DiagnosticFn>,
}

impl Diagnostics {
    /// Replace the `@debug` sink.
    pub fn on_debug(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.debug = Some(Arc::new(handler));
        self
    }

    /// Replace the `@warn` sink.
    pub fn on_warn(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.warn = Some(Arc::new(handler));
        self
    }

    /// Replace the compiler-error sink.
    pub fn on_error(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.error = Some(Arc::new(handler));
        self
    }

    /// Dispatch a `@debug` message.
    pub fn debug(&self, message: &str) {
        match &self.debug {
            Some(handler) => handler(message),
            None => tracing::debug!("{}", message),
        }
    }

    /// Dispatch a `@warn` message.
    pub fn warn(&self, message: &str) {
        match &self.warn {
            Some(handler) => handler(message),
            None => tracing::warn!("{}", message),
        }
    }

    /// Dispatch a compiler error message.
    pub fn error(&self, message: &str) {
        match &self.error {
            Some(handler) => handler(message),
            None => tracing::error!("{}", message),
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("debug", &self.debug.is_some())
            .field("warn", &self.warn.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

/// Forwards `@debug`/`@warn` statements from the compiler to the sinks.
#[derive(Debug)]
pub(crate) struct CompilerLogger<'a> {
    diagnostics: &'a Diagnostics,
}

impl<'a> CompilerLogger<'a> {
    pub(crate) fn new(diagnostics: &'a Diagnostics) -> Self {
        Self { diagnostics }
    }
}

impl grass::Logger for CompilerLogger<'_> {
    fn debug(&self, _location: SpanLoc, message: &str) {
        self.diagnostics.debug(message);
    }

    fn warn(&self, _location: SpanLoc, message: &str) {
        self.diagnostics.warn(message);
    }
}
