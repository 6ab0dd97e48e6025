//! Integration tests for layered environment loading
//!
//! Defaults, TOML file, and environment variables are merged in that
//! order; whatever comes out must still pass validation.

use cortado_config::{Environment, Profile};
use serial_test::serial;
use std::io::Write;

fn init_logging() {
    cortado_common::logging::try_init_logging("cortado_config=debug");
}

fn clear_cortado_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("CORTADO_") {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn file_overrides_profile_defaults() {
    init_logging();
    clear_cortado_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
api_server_url = "http://127.0.0.1:8000"

[auth0]
audience = "espresso"
"#
    )
    .unwrap();

    let environment = Environment::load_for_profile(Profile::Development, Some(file.path())).unwrap();

    // overridden by the file
    assert_eq!(environment.api_server_url, "http://127.0.0.1:8000");
    assert_eq!(environment.auth0.audience, "espresso");
    // untouched defaults
    assert!(!environment.production);
    assert_eq!(environment.auth0.callback_url, "http://localhost:8100");
}

#[test]
#[serial]
fn env_overrides_beat_file_values() {
    init_logging();
    clear_cortado_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_server_url = \"http://127.0.0.1:8000\"").unwrap();

    std::env::set_var("CORTADO_API_SERVER_URL", "http://127.0.0.1:9000");
    std::env::set_var("CORTADO_AUTH0__CLIENT_ID", "EnvSuppliedClientId0000000000000");

    let result = Environment::load_for_profile(Profile::Development, Some(file.path()));
    clear_cortado_env();

    let environment = result.unwrap();
    assert_eq!(environment.api_server_url, "http://127.0.0.1:9000");
    assert_eq!(environment.auth0.client_id, "EnvSuppliedClientId0000000000000");
}

#[test]
#[serial]
fn production_flag_parses_from_env() {
    init_logging();
    clear_cortado_env();

    std::env::set_var("CORTADO_PRODUCTION", "true");
    let result = Environment::load_for_profile(Profile::Development, None);
    clear_cortado_env();

    assert!(result.unwrap().production);
}

#[test]
#[serial]
fn profile_env_var_selects_production_defaults() {
    init_logging();
    clear_cortado_env();

    std::env::set_var("CORTADO_PROFILE", "production");
    let result = Environment::load(None);
    clear_cortado_env();

    let environment = result.unwrap();
    assert!(environment.production);
    assert_eq!(
        environment.api_server_url,
        Environment::defaults(Profile::Production).api_server_url
    );
}

#[test]
#[serial]
fn unrecognized_profile_is_an_error() {
    init_logging();
    clear_cortado_env();

    std::env::set_var("CORTADO_PROFILE", "staging");
    let result = Environment::load(None);
    clear_cortado_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn invalid_override_fails_validation() {
    init_logging();
    clear_cortado_env();

    std::env::set_var("CORTADO_AUTH0__CLIENT_ID", "");
    let result = Environment::load_for_profile(Profile::Development, None);
    clear_cortado_env();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("auth0.client_id"));
}
