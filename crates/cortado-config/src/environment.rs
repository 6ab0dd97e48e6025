//! Environment configuration record
//!
//! One immutable record per process run: the backend API base URL, the
//! Auth0 tenant parameters, and the production flag. The record is
//! selected from compiled-in profile defaults at startup, optionally
//! overridden by a TOML file and `CORTADO_`-prefixed environment
//! variables, validated, and then never mutated again.

use crate::auth0::Auth0Config;
use crate::defaults;
use crate::profile::{Profile, PROFILE_ENV_VAR};
use crate::validate::ensure_url;
use cortado_common::config::ConfigLoader;
use cortado_common::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Process-wide instance installed by [`Environment::init`]
static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Main configuration structure for the Cortado front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Build-mode flag
    pub production: bool,

    /// Base URL of the backend API server
    pub api_server_url: String,

    /// Identity-provider parameters
    pub auth0: Auth0Config,
}

impl Default for Environment {
    // The checked-in development record, like the dev environment file
    // the build system would otherwise substitute.
    fn default() -> Self {
        Self::defaults(Profile::Development)
    }
}

impl Environment {
    /// Compiled-in record for the given profile
    pub fn defaults(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self {
                production: false,
                api_server_url: defaults::DEV_API_SERVER_URL.to_string(),
                auth0: Auth0Config {
                    url: defaults::DEV_AUTH0_URL.to_string(),
                    audience: defaults::DEV_AUTH0_AUDIENCE.to_string(),
                    client_id: defaults::DEV_AUTH0_CLIENT_ID.to_string(),
                    callback_url: defaults::DEV_CALLBACK_URL.to_string(),
                },
            },
            Profile::Production => Self {
                production: true,
                api_server_url: defaults::PROD_API_SERVER_URL.to_string(),
                auth0: Auth0Config {
                    url: defaults::PROD_AUTH0_URL.to_string(),
                    audience: defaults::PROD_AUTH0_AUDIENCE.to_string(),
                    client_id: defaults::PROD_AUTH0_CLIENT_ID.to_string(),
                    callback_url: defaults::PROD_CALLBACK_URL.to_string(),
                },
            },
        }
    }

    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigurationError> {
        match config_path {
            Some(path) => <Environment as ConfigLoader<Environment>>::load_from_file(path),
            None => <Environment as ConfigLoader<Environment>>::load(None),
        }
    }

    /// Load with an explicit profile instead of consulting `CORTADO_PROFILE`
    pub fn load_for_profile(
        profile: Profile,
        config_path: Option<&Path>,
    ) -> Result<Self, ConfigurationError> {
        debug!(profile = %profile, path = ?config_path, "loading environment configuration");

        let base = Figment::from(Serialized::defaults(Self::defaults(profile)));
        let figment = match config_path {
            Some(path) => base.merge(Toml::file(path)),
            None => base.merge(Toml::file(Self::default_file())),
        }
        .merge(Env::prefixed(Self::env_prefix()).split("__"));

        let environment: Self =
            figment.extract().map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;

        environment.validate()?;
        Ok(environment)
    }

    /// Generate example configuration file
    pub fn generate_example() -> Result<String, ConfigurationError> {
        let environment = Self::default();
        toml::to_string_pretty(&environment).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }

    /// Check the record against the constraints consumers rely on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_url("api_server_url", &self.api_server_url)?;
        self.auth0.validate()?;
        Ok(())
    }

    /// Install the configuration as the process-wide instance.
    ///
    /// Returns an error if the record fails validation or an instance
    /// was already installed.
    pub fn init(environment: Environment) -> Result<(), ConfigurationError> {
        environment.validate()?;
        ENVIRONMENT
            .set(environment)
            .map_err(|_| ConfigurationError::InvalidConfig {
                details: "environment configuration already initialized".to_string(),
            })
    }

    /// Process-wide configuration, installing profile defaults on first use.
    ///
    /// Every call returns the same reference; reads need no
    /// synchronization since the record never changes after
    /// installation.
    pub fn global() -> &'static Environment {
        ENVIRONMENT.get_or_init(|| {
            let profile = Profile::from_env().unwrap_or_else(|e| {
                warn!("ignoring {PROFILE_ENV_VAR}: {e}");
                Profile::compiled_default()
            });
            Self::defaults(profile)
        })
    }
}

impl ConfigLoader<Environment> for Environment {
    fn default_file() -> &'static str {
        "cortado.toml"
    }

    fn env_prefix() -> &'static str {
        "CORTADO_"
    }

    fn load(path: Option<PathBuf>) -> Result<Environment, ConfigurationError> {
        let profile = Profile::from_env()?;
        Environment::load_for_profile(profile, path.as_deref())
    }

    fn load_from_file(path: &Path) -> Result<Environment, ConfigurationError> {
        let profile = Profile::from_env()?;
        Environment::load_for_profile(profile, Some(path))
    }
}
