//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The state holds the immutable
//! configuration and the instantiated upstream recipe provider, making them
//! accessible to all request handlers. Nothing in it is mutated after
//! startup, so requests share no mutable state.

use crate::config::AppConfig;
use crate::errors::AppError;
use forkful::{RecipeError, RecipeProvider, SpoonacularProvider};
use std::{sync::Arc, time::Duration};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded once at startup.
    pub config: Arc<AppConfig>,
    /// The upstream recipe provider.
    pub recipes: Arc<dyn RecipeProvider>,
}

impl AppState {
    /// Wraps an upstream failure for the response layer, capturing whether
    /// the runtime mode allows diagnostic detail in the body.
    pub fn upstream_error(&self, source: RecipeError) -> AppError {
        AppError::Upstream {
            source,
            expose_detail: self.config.environment.is_development(),
        }
    }
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "An upstream API key is required. Set SPOONACULAR_API_KEY in the environment or api_key in config.yml."
        )
    })?;

    let recipes = SpoonacularProvider::new(
        config.api_url.clone(),
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    Ok(AppState {
        config: Arc::new(config),
        recipes: Arc::new(recipes),
    })
}
