//! # Cortado Environment Configuration
//!
//! Build-time environment configuration for the Cortado cafe front-end.
//!
//! ## Features
//!
//! - **Profiles**: development and production environments selected at
//!   startup, mirroring the compile mode unless overridden
//! - **Compiled-in Defaults**: the application starts without any external
//!   configuration files
//! - **Layered Overrides**: optional TOML file and `CORTADO_`-prefixed
//!   environment variables on top of the defaults
//! - **Validation**: URL and field checks at the load boundary
//! - **Stable Access**: a process-wide immutable instance, safe for
//!   unsynchronized concurrent reads

pub mod auth0;
pub mod defaults;
pub mod environment;
pub mod profile;

mod validate;

// Re-export commonly used types
pub use auth0::Auth0Config;
pub use cortado_common::ConfigurationError;
pub use environment::Environment;
pub use profile::Profile;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Version of the cortado-config crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
