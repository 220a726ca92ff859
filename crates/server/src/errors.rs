use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forkful::RecipeError;
use serde_json::{json, Value};
use tracing::error;

/// The message returned for every failure that is not resolved locally.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// A custom error type for the server application.
///
/// This enum encapsulates the different kinds of errors that can occur while
/// handling a request, allowing them to be converted into appropriate HTTP
/// responses with the uniform `{success, message, error?}` envelope.
#[derive(Debug)]
pub enum AppError {
    /// The request failed local validation; no upstream call was made.
    BadRequest(String),
    /// The upstream reported that the requested recipe does not exist.
    NotFound(String),
    /// The upstream call failed. `expose_detail` carries the runtime-mode
    /// decision of whether the raw upstream detail is included in the body.
    Upstream {
        source: RecipeError,
        expose_detail: bool,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => envelope(StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound(message) => envelope(StatusCode::NOT_FOUND, message, None),
            AppError::Upstream {
                source,
                expose_detail,
            } => {
                error!("Upstream recipe API error: {source:?}");
                // Mirror the upstream status when it responded; transport
                // failures and the like become a 500.
                let status = source
                    .status()
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let detail = expose_detail.then(|| upstream_detail(&source));
                envelope(status, GENERIC_ERROR_MESSAGE.to_string(), detail)
            }
        }
    }
}

/// The diagnostic payload attached to error responses in development mode.
///
/// Upstream error bodies are usually JSON; fall back to the raw text when
/// they are not.
fn upstream_detail(source: &RecipeError) -> Value {
    match source {
        RecipeError::ApiStatus { body, .. } => {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.clone()))
        }
        other => Value::String(other.to_string()),
    }
}

fn envelope(status: StatusCode, message: String, error: Option<Value>) -> Response {
    let mut body = json!({
        "success": false,
        "message": message,
    });
    if let Some(detail) = error {
        body["error"] = detail;
    }
    (status, Json(body)).into_response()
}
