//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! request
//!     → middleware.rs (cache handle attached; GET /css/*.css intercepted)
//!         → cache (read on hit, write after compile)
//!         → compiler (resolve + compile on miss)
//!     → response.rs (text/css responder)
//! non-matching requests → inner service unchanged
//! ```

pub mod middleware;
pub mod request;
pub mod response;

pub use middleware::SassMiddleware;
pub use request::FlushCssExt;
pub use response::Css;
