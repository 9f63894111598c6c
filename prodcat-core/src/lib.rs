//! prodcat-core: shared configuration and error types
//!
//! Everything the server and CLI crates have in common lives here:
//! the layered configuration (defaults <- TOML file <- environment) and
//! the structured error type wrapping config/I/O failures.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{CoreError, Result};
