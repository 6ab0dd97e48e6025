//! # Cortado Common
//!
//! Shared foundations for the Cortado workspace: error types, logging
//! initialization, and the configuration-loading trait implemented by the
//! environment configuration crate.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::ConfigLoader;
pub use error::{ConfigurationError, CortadoError};

/// Version of the cortado-common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
