//! Auth0 identity-provider parameters
//!
//! The front-end starts logins against the tenant described here and the
//! backend checks tokens against the same audience. This module only
//! carries the parameters and the endpoint URLs derived from them; the
//! actual login and token handling live with the consumers.

use crate::validate::{ensure_domain_prefix, ensure_non_empty, ensure_url};
use cortado_common::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Auth0 tenant parameters for the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// Tenant domain prefix (e.g. "cortado-dev.us")
    pub url: String,

    /// Audience set for the Auth0 API
    pub audience: String,

    /// Client ID generated for the Auth0 application
    pub client_id: String,

    /// Base URL the provider redirects back to after login
    pub callback_url: String,
}

impl Auth0Config {
    /// Full tenant domain, e.g. "cortado-dev.us.auth0.com"
    pub fn tenant_domain(&self) -> String {
        format!("{}.auth0.com", self.url)
    }

    /// Token issuer URL for this tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }

    /// JWKS endpoint serving the tenant signing keys
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.tenant_domain())
    }

    /// Check the tenant parameters against the constraints consumers rely on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_domain_prefix("auth0.url", &self.url)?;
        ensure_non_empty("auth0.audience", &self.audience)?;
        ensure_non_empty("auth0.client_id", &self.client_id)?;
        ensure_url("auth0.callback_url", &self.callback_url)?;
        Ok(())
    }
}
