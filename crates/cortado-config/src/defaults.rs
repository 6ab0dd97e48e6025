//! Compiled-in environment defaults
//!
//! These values are pre-compiled into the binary so the application can
//! start without external configuration files. File and environment
//! overrides layer on top of them.

// Development environment

/// Backend API base URL for local development
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant domain prefix for the development tenant
pub const DEV_AUTH0_URL: &str = "cortado-dev.us";

/// Auth0 audience for the drinks API
pub const DEV_AUTH0_AUDIENCE: &str = "cortado";

/// Auth0 client ID for the development front-end application
pub const DEV_AUTH0_CLIENT_ID: &str = "hT4qFeCZyUnYbYxLwVYkn0V7bRr0F2hc";

/// Base URL of the locally served front-end, used as the login redirect
pub const DEV_CALLBACK_URL: &str = "http://localhost:8100";

// Production environment

/// Backend API base URL in production
pub const PROD_API_SERVER_URL: &str = "https://api.cortado.coffee";

/// Auth0 tenant domain prefix for the production tenant
pub const PROD_AUTH0_URL: &str = "cortado.us";

/// Auth0 audience for the drinks API
pub const PROD_AUTH0_AUDIENCE: &str = "cortado";

/// Auth0 client ID for the production front-end application
pub const PROD_AUTH0_CLIENT_ID: &str = "Zc3vKqWyn0mP8dLtUxEaJ5RhYgN1wTbS";

/// Base URL of the deployed front-end, used as the login redirect
pub const PROD_CALLBACK_URL: &str = "https://app.cortado.coffee";
