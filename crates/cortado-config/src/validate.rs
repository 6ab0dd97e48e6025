//! Field-level validation helpers

use cortado_common::ConfigurationError;
use url::Url;

pub(crate) fn ensure_non_empty(field: &str, value: &str) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::InvalidConfig {
            details: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Require an absolute http(s) URL
pub(crate) fn ensure_url(field: &str, value: &str) -> Result<(), ConfigurationError> {
    ensure_non_empty(field, value)?;

    let url = Url::parse(value).map_err(|e| ConfigurationError::InvalidConfig {
        details: format!("{field} is not a valid URL: {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigurationError::InvalidConfig {
            details: format!("{field} must use http or https, got '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Require a bare domain prefix, e.g. "cortado-dev.us", not a URL
pub(crate) fn ensure_domain_prefix(field: &str, value: &str) -> Result<(), ConfigurationError> {
    ensure_non_empty(field, value)?;

    if value.contains("://") || value.contains('/') {
        return Err(ConfigurationError::InvalidConfig {
            details: format!("{field} must be a bare domain prefix, not a URL"),
        });
    }

    Ok(())
}
