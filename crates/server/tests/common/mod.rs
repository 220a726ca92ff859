//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `forkful-server`
//! integration tests. `TestApp` spawns the real server on a random port,
//! configured to call an `httpmock::MockServer` instead of the real upstream
//! recipe API.

#![allow(unused)]

use anyhow::Result;
use forkful_server::{config, router::create_router, state::build_app_state};
use httpmock::MockServer;
use reqwest::Client;
use std::{fs::File, io::Write};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the application in production mode against a mock upstream.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with("production", None).await
    }

    /// Spawns the application in development mode, where error responses
    /// carry upstream diagnostic detail.
    pub async fn spawn_in_development() -> Result<Self> {
        Self::spawn_with("development", None).await
    }

    /// Spawns the application with the given runtime mode, optionally
    /// overriding the upstream URL (the default is the mock server).
    pub async fn spawn_with(environment: &str, api_url_override: Option<&str>) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let api_url = api_url_override
            .map(str::to_string)
            .unwrap_or_else(|| mock_server.base_url());

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
api_url: "{api_url}"
api_key: "test-api-key"
environment: "{environment}"
request_timeout_secs: 2
"#
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config)?;
        let app = create_router(app_state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
        })
    }
}
