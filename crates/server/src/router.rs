use super::{handlers, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Creates the Axum router with all the application routes.
///
/// API routes live under `/api/recipes`; anything else falls through to the
/// static front-end, with `index.html` served for unknown paths.
pub fn create_router(app_state: AppState) -> Router {
    let static_dir = app_state.config.static_dir.clone();
    let index = format!("{static_dir}/index.html");
    let front_end = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/recipes/search", get(handlers::search_recipes))
        .route(
            "/api/recipes/suggestions",
            get(handlers::recipe_suggestions),
        )
        .route("/api/recipes/{id}", get(handlers::recipe_by_id))
        .fallback_service(front_end)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
