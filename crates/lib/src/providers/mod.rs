pub mod spoonacular;

use crate::errors::RecipeError;
use crate::types::{RecipeDetail, SearchQuery, SearchResults};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a recipe-data provider.
///
/// This defines the common interface the server depends on: ingredient-based
/// search, detail lookup, and popularity-sorted suggestions. Implementations
/// issue one outbound call per invocation and never cache or retry.
#[async_trait]
pub trait RecipeProvider: Send + Sync + Debug + DynClone {
    /// Searches for recipes matching the given ingredients and diet filters.
    async fn search_by_ingredients(&self, query: &SearchQuery)
        -> Result<SearchResults, RecipeError>;

    /// Fetches full information for a single recipe by identifier.
    async fn get_by_id(&self, id: &str) -> Result<RecipeDetail, RecipeError>;

    /// Fetches the most popular recipes, optionally filtered by diet.
    async fn get_suggestions(
        &self,
        diets: &[String],
        number: u32,
    ) -> Result<SearchResults, RecipeError>;
}

dyn_clone::clone_trait_object!(RecipeProvider);
