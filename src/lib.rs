//! Sass/SCSS compilation middleware for axum routers.
//!
//! On requests matching `/css/*.css` (or `*.min.css`) the middleware
//! locates the stylesheet source under a configured source root, compiles
//! it with configured variables prepended, caches the compiled output, and
//! serves it as `text/css`. Requests it cannot serve (no match, missing
//! source file, hidden partial) fall through to the inner service.
//!
//! ```no_run
//! use axum::Router;
//! use axum_sass::{SassConfig, SassMiddleware, Syntax};
//!
//! let mut config = SassConfig::default();
//! config.mode = Syntax::Scss;
//! config.variables.insert("color-primary".into(), "#00AAFF".into());
//!
//! let sass = SassMiddleware::new(config);
//! let app: Router = sass.attach(Router::new());
//! ```

// Core subsystems
pub mod compiler;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod cache;
pub mod observability;

pub use cache::ResultCache;
pub use compiler::{CompileError, Diagnostics, OutputStyle};
pub use config::{load_config, ConfigError, SassConfig, Syntax};
pub use http::{Css, FlushCssExt, SassMiddleware};
