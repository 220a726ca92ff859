//! # Configuration Tests
//!
//! Tests for the layered configuration loading: defaults, explicit file
//! values, `${VAR}` environment substitution, and the missing-file error.

use anyhow::Result;
use forkful_server::config::{get_config, ConfigError, RuntimeMode};
use std::{fs::File, io::Write};
use tempfile::tempdir;

fn write_config(content: &str) -> Result<(tempfile::TempDir, String)> {
    let dir = tempdir()?;
    let path = dir.path().join("config.yml");
    File::create(&path)?.write_all(content.as_bytes())?;
    let path = path.to_str().unwrap().to_string();
    Ok((dir, path))
}

#[test]
fn defaults_apply_when_file_is_minimal() -> Result<()> {
    let (_dir, path) = write_config("api_key: \"test-key\"\n")?;

    let config = get_config(Some(&path))?;

    assert_eq!(config.port, 8080);
    assert_eq!(config.api_url, "https://api.spoonacular.com");
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.environment, RuntimeMode::Production);
    assert!(!config.environment.is_development());
    assert_eq!(config.request_timeout_secs, 10);
    Ok(())
}

#[test]
fn file_values_override_defaults() -> Result<()> {
    let (_dir, path) = write_config(
        r#"
port: 9999
api_url: "http://localhost:9000"
api_key: "file-key"
environment: "development"
request_timeout_secs: 3
static_dir: "assets"
"#,
    )?;

    let config = get_config(Some(&path))?;

    assert_eq!(config.port, 9999);
    assert_eq!(config.api_url, "http://localhost:9000");
    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.environment, RuntimeMode::Development);
    assert!(config.environment.is_development());
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.static_dir, "assets");
    Ok(())
}

#[test]
fn file_values_substitute_environment_variables() -> Result<()> {
    // PATH is set in every test environment, which makes it a convenient
    // substitution source even though it is a nonsense API key.
    let (_dir, path) = write_config("api_key: \"${PATH}\"\n")?;

    let config = get_config(Some(&path))?;

    assert_eq!(config.api_key, Some(std::env::var("PATH")?));
    Ok(())
}

#[test]
fn explicitly_requested_missing_file_is_an_error() {
    let result = get_config(Some("/nonexistent/forkful-config.yml"));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}
