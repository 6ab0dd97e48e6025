//! Logging initialization for Cortado binaries and tests
//!
//! This module provides a standardized logging setup that respects the
//! following priority order:
//! 1. RUST_LOG environment variable - highest priority
//! 2. Caller-provided default filter - lowest priority

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the specified default filter.
///
/// # Arguments
///
/// * `default_filter` - The default filter string if RUST_LOG is not set
///
/// # Example
///
/// ```no_run
/// use cortado_common::logging;
///
/// logging::init_logging("cortado_config=info").unwrap();
/// ```
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true) // Show module path
                .compact(), // Use compact format
        )
        .init();

    Ok(())
}

/// Initialize logging, tolerating an already-installed subscriber
///
/// Tests and embedding applications may have set a global subscriber
/// before this crate is reached.
///
/// # Returns
///
/// * `true` if this call installed the subscriber
/// * `false` if a subscriber was already installed or the filter was invalid
pub fn try_init_logging(default_filter: &str) -> bool {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(default_filter) {
            Ok(filter) => filter,
            Err(_) => return false,
        },
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).compact())
        .try_init()
        .is_ok()
}
