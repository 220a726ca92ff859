use thiserror::Error;

/// Custom error types for the upstream recipe API client.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to recipe API: {0}")]
    ApiRequest(reqwest::Error),
    #[error("Recipe API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("Failed to deserialize recipe API response: {0}")]
    ApiDeserialization(reqwest::Error),
}

impl RecipeError {
    /// The HTTP status reported by the upstream API, when it responded at all.
    ///
    /// Transport-level failures (connection refused, timeout) have no status
    /// and are reported as `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            RecipeError::ApiStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
