//! Configuration loading infrastructure
//!
//! Configuration is layered: compiled-in defaults first, then an optional
//! TOML file, then environment variable overrides. The [`ConfigLoader`]
//! trait captures that stack once so every configuration type in the
//! workspace loads the same way.

use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// Loader for a configuration type `T`
///
/// Implementors only have to name the default file and environment
/// prefix; the figment stack itself comes from the default methods.
/// Nested fields are addressed in the environment with `__`, e.g.
/// `PREFIX_AUTH0__CLIENT_ID` for `auth0.client_id`.
pub trait ConfigLoader<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// TOML file consulted when no explicit path is given
    fn default_file() -> &'static str;

    /// Prefix for environment variable overrides
    fn env_prefix() -> &'static str;

    /// Load configuration from defaults, optional file, and environment
    fn load(path: Option<PathBuf>) -> Result<T, ConfigurationError> {
        let figment = match path {
            Some(p) => Figment::from(Serialized::defaults(T::default()))
                .merge(Toml::file(p))
                .merge(Env::prefixed(Self::env_prefix()).split("__")),
            None => Figment::from(Serialized::defaults(T::default()))
                .merge(Toml::file(Self::default_file()))
                .merge(Env::prefixed(Self::env_prefix()).split("__")),
        };

        figment.extract().map_err(|e| ConfigurationError::ParseError {
            details: e.to_string(),
        })
    }

    /// Load configuration from a specific file path
    fn load_from_file(path: &Path) -> Result<T, ConfigurationError> {
        Self::load(Some(path.to_path_buf()))
    }

    /// Re-apply environment overrides on top of an existing configuration
    fn apply_env_overrides(config: &mut T, prefix: &str) -> Result<(), ConfigurationError> {
        let figment = Figment::from(Serialized::defaults(config.clone()))
            .merge(Env::prefixed(prefix).split("__"));

        *config = figment.extract().map_err(|e| ConfigurationError::ParseError {
            details: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        retries: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "sample".to_string(),
                retries: 3,
            }
        }
    }

    impl ConfigLoader<SampleConfig> for SampleConfig {
        fn default_file() -> &'static str {
            "sample.toml"
        }

        fn env_prefix() -> &'static str {
            "CORTADO_TEST_SAMPLE_"
        }
    }

    #[test]
    fn test_load_defaults_when_file_missing() {
        // Toml::file on a nonexistent path contributes nothing
        let config = SampleConfig::load(Some(PathBuf::from("/nonexistent/sample.toml"))).unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retries = 9").unwrap();

        let config = SampleConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.retries, 9);
        assert_eq!(config.name, "sample");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retries = \"not a number\"").unwrap();

        let err = SampleConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseError { .. }));
    }
}
