//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or host-built struct
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SassConfig (validated)
//!     → defaults resolved once by SassMiddleware::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the middleware is constructed
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::SassConfig;
pub use schema::Syntax;
pub use validation::{validate_config, ValidationError};
