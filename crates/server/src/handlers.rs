//! # API Route Handlers
//!
//! The translator/normalizer layer: each handler validates its query
//! parameters, converts comma-separated strings into ordered lists, delegates
//! to the upstream provider, and wraps the result in the response envelope.
//! Validation failures and the get-by-id not-found case are resolved here;
//! every other failure is deferred to `AppError`.

use crate::{errors::AppError, state::AppState, types::ApiResponse};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use forkful::{RecipeDetail, RecipeError, SearchQuery, SearchResults, DEFAULT_RESULT_COUNT};
use serde::Deserialize;
use tracing::info;

/// Query parameters accepted by the search endpoint. All are passed as raw
/// strings and parsed here, so malformed values produce envelope errors
/// rather than extractor rejections.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub ingredients: Option<String>,
    pub diets: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SuggestionParams {
    pub diets: Option<String>,
    pub number: Option<String>,
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for `GET /api/recipes/search`.
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResults>>, AppError> {
    let ingredients_raw = params.ingredients.unwrap_or_default();
    if ingredients_raw.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Ingredients are required for recipe search".to_string(),
        ));
    }

    let query = SearchQuery {
        ingredients: split_csv(&ingredients_raw),
        diets: parse_diets(params.diets.as_deref()),
        number: parse_number(params.number.as_deref())?,
    };
    info!(
        ingredients = ?query.ingredients,
        diets = ?query.diets,
        number = query.number,
        "search request received"
    );

    let results = state
        .recipes
        .search_by_ingredients(&query)
        .await
        .map_err(|e| state.upstream_error(e))?;

    info!(returned = results.results.len(), "returning recipes");
    Ok(Json(ApiResponse::ok(results)))
}

/// The handler for `GET /api/recipes/{id}`.
pub async fn recipe_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RecipeDetail>>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Recipe ID is required".to_string()));
    }

    match state.recipes.get_by_id(&id).await {
        Ok(detail) => Ok(Json(ApiResponse::ok(detail))),
        // An upstream 404 means the identifier itself is unknown; report it
        // as such instead of the generic upstream-failure envelope.
        Err(RecipeError::ApiStatus { status: 404, .. }) => {
            Err(AppError::NotFound("Recipe not found".to_string()))
        }
        Err(e) => Err(state.upstream_error(e)),
    }
}

/// The handler for `GET /api/recipes/suggestions`.
pub async fn recipe_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<ApiResponse<SearchResults>>, AppError> {
    let diets = parse_diets(params.diets.as_deref());
    let number = parse_number(params.number.as_deref())?;

    let suggestions = state
        .recipes
        .get_suggestions(&diets, number)
        .await
        .map_err(|e| state.upstream_error(e))?;

    Ok(Json(ApiResponse::ok(suggestions)))
}

/// Splits a comma-separated parameter, trimming each element.
///
/// Order is preserved and empty elements are kept: "a,,b" yields
/// ["a", "", "b"], which joins back to the caller's input unchanged.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

fn parse_diets(raw: Option<&str>) -> Vec<String> {
    raw.filter(|diets| !diets.is_empty())
        .map(split_csv)
        .unwrap_or_default()
}

/// Parses the `number` parameter, defaulting when absent or blank.
///
/// Non-numeric and non-positive values are rejected rather than forwarded
/// upstream.
fn parse_number(raw: Option<&str>) -> Result<u32, AppError> {
    match raw.map(str::trim).filter(|number| !number.is_empty()) {
        None => Ok(DEFAULT_RESULT_COUNT),
        Some(raw) => match raw.parse::<u32>() {
            Ok(number) if number > 0 => Ok(number),
            _ => Err(AppError::BadRequest(
                "The number parameter must be a positive integer".to_string(),
            )),
        },
    }
}
