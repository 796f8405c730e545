//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)            flat `Section:Key` pairs / environment
//!     → loader.rs (parse)           → source.rs (resolve keys)
//!     → validation.rs (semantic checks)
//!     → AppConfig / HeadersConfig (read once at startup)
//!     → PolicyBuilder::add_from_configuration
//! ```
//!
//! # Design Decisions
//! - Config is read once; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Header directives are never rejected; unknown values are skipped later
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod source;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::CustomHeadersConfig;
pub use schema::HeadersConfig;
pub use schema::ObservabilityConfig;
pub use schema::SecurityConfig;
pub use schema::ServerConfig;
