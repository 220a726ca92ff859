//! # Recipe Search Client
//!
//! This crate provides a client for a Spoonacular-compatible recipe API:
//! ingredient-based search, recipe detail lookup, and popularity-sorted
//! suggestions. The HTTP server in `forkful-server` translates public query
//! parameters into these calls and wraps the results in a response envelope.

pub mod errors;
pub mod providers;
pub mod types;

pub use errors::RecipeError;
pub use providers::{spoonacular::SpoonacularProvider, RecipeProvider};
pub use types::{
    IngredientInfo, RecipeDetail, RecipeSummary, SearchQuery, SearchResults, DEFAULT_RESULT_COUNT,
};
