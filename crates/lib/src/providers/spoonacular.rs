use crate::{
    errors::RecipeError,
    providers::RecipeProvider,
    types::{RecipeDetail, SearchQuery, SearchResults},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// A provider for interacting with the Spoonacular recipe API.
///
/// The API key and base URL are fixed at construction and immutable for the
/// lifetime of the provider. Every request carries the key as the `apiKey`
/// query parameter and is bounded by the configured timeout.
#[derive(Clone, Debug)]
pub struct SpoonacularProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl SpoonacularProvider {
    /// Creates a new `SpoonacularProvider`.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, RecipeError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(RecipeError::ClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Issues a GET request and deserializes a 2xx response body.
    ///
    /// Non-2xx responses preserve the upstream status and raw body so the
    /// server can mirror them; transport failures carry no status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, RecipeError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(RecipeError::ApiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecipeError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(RecipeError::ApiDeserialization)
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    /// Searches recipes via `complexSearch`, requesting full recipe
    /// information, filled ingredient lists, and required instructions.
    async fn search_by_ingredients(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResults, RecipeError> {
        let ingredients = query.ingredients.join(",");
        let diets = query.diets.join(",");

        debug!(%ingredients, %diets, number = query.number, "searching recipes");

        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("number", query.number.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
            ("instructionsRequired", "true".to_string()),
        ];
        if !ingredients.is_empty() {
            params.push(("includeIngredients", ingredients));
        }
        if !diets.is_empty() {
            params.push(("diet", diets));
        }

        self.get_json(format!("{}/recipes/complexSearch", self.api_url), &params)
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<RecipeDetail, RecipeError> {
        debug!(id, "fetching recipe detail");

        let params = [
            ("apiKey", self.api_key.clone()),
            ("includeNutrition", "true".to_string()),
        ];

        self.get_json(format!("{}/recipes/{id}/information", self.api_url), &params)
            .await
    }

    /// Fetches suggestions via `complexSearch` sorted by popularity,
    /// descending. The diet filter is applied only when non-empty.
    async fn get_suggestions(
        &self,
        diets: &[String],
        number: u32,
    ) -> Result<SearchResults, RecipeError> {
        let diets = diets.join(",");

        debug!(%diets, number, "fetching recipe suggestions");

        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("number", number.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("sort", "popularity".to_string()),
            ("sortDirection", "desc".to_string()),
        ];
        if !diets.is_empty() {
            params.push(("diet", diets));
        }

        self.get_json(format!("{}/recipes/complexSearch", self.api_url), &params)
            .await
    }
}
