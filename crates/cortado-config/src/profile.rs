//! Build profile selection
//!
//! The front-end ships with two compiled-in environments. Which one is
//! active follows the compile mode, unless `CORTADO_PROFILE` says
//! otherwise.

use cortado_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Profile::from_env`]
pub const PROFILE_ENV_VAR: &str = "CORTADO_PROFILE";

/// Deployment profile the configuration defaults are selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    /// Resolve the active profile from the environment.
    ///
    /// `CORTADO_PROFILE` takes priority; when it is unset, the compile
    /// mode decides. An unrecognized value is an error rather than a
    /// silent fallback.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        match std::env::var(PROFILE_ENV_VAR) {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(Self::compiled_default()),
            Err(e) => Err(ConfigurationError::EnvError {
                var: PROFILE_ENV_VAR.to_string(),
                details: e.to_string(),
            }),
        }
    }

    /// Profile implied by the compile mode when no override is present
    pub fn compiled_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Check whether this is the production profile
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Profile {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigurationError::EnvError {
                var: PROFILE_ENV_VAR.to_string(),
                details: format!("unrecognized profile '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}
