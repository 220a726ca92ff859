//! # Application Configuration
//!
//! This module defines the configuration structure for the `forkful-server`
//! and provides the logic for loading it from an optional `config.yml` file
//! and environment variables. The configuration is loaded once at startup and
//! is immutable for the lifetime of the process.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The runtime mode, controlling whether error responses carry upstream
/// diagnostic detail.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The base URL of the upstream recipe API. Loaded from `API_URL` env var.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The upstream API key. Loaded from `SPOONACULAR_API_KEY` env var when
    /// not set in the file.
    #[serde(default)]
    pub api_key: Option<String>,
    /// The runtime mode. Loaded from `ENVIRONMENT` env var.
    #[serde(default)]
    pub environment: RuntimeMode,
    /// Upper bound on each upstream call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// The directory holding the static front-end assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    8080
}

/// Provides a default value for the `api_url` field if not set in the environment.
fn default_api_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_static_dir() -> String {
    format!("{}/public", env!("CARGO_MANIFEST_DIR"))
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// The `config.yml` file is optional; every field can come from the
/// environment instead. Values in the file may reference environment
/// variables as `${VAR}`. Precedence, lowest to highest: file contents,
/// plain environment variables (`PORT`, `API_URL`, ...), then
/// `FORKFUL_`-prefixed overrides.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'"))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            }
            content
        }
    };
    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed environment variables for explicit overrides.
        .add_source(
            Environment::with_prefix("FORKFUL")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // The upstream credential is conventionally provided as
    // SPOONACULAR_API_KEY; accept it when the file does not set api_key.
    if config.api_key.is_none() {
        if let Ok(key) = env::var("SPOONACULAR_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
