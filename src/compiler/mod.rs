//! Stylesheet resolution and compilation subsystem.
//!
//! # Data Flow
//! ```text
//! request path
//!     → resolver.rs (source file + output style, or "not ours")
//!     → engine.rs (variable prelude + grass invocation)
//!         → diagnostics.rs (@debug/@warn/@error routing)
//!     → compiled CSS text
//! ```
//!
//! # Design Decisions
//! - The compiler itself is external (`grass`); this subsystem only adapts
//! - Resolution is pure; all filesystem access stays in the middleware
//! - The variable prelude is built once, at middleware construction

pub mod diagnostics;
pub mod engine;
pub mod resolver;

pub use diagnostics::{DiagnosticFn, Diagnostics};
pub use engine::{compile, variable_prelude, CompileError};
pub use resolver::{OutputStyle, Resolution, Resolver};
