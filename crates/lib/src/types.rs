//! # Request and Response Shapes
//!
//! These types are read-only views over the upstream API's JSON. Every
//! response struct carries a flattened `extra` map, so fields this crate does
//! not model survive deserialization and are re-serialized unchanged. The
//! server relies on that to return upstream payloads verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The number of results requested when the caller does not specify one.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// A parsed search request, ready to be translated into upstream parameters.
///
/// Both lists preserve the order of the caller's comma-separated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub ingredients: Vec<String>,
    pub diets: Vec<String>,
    pub number: u32,
}

/// The upstream search response: a page of recipe summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single recipe as it appears in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full recipe information as returned by the get-by-id endpoint.
///
/// `instructions` and `source_url` are genuinely absent for some recipes and
/// must stay absent on re-serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<IngredientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// The human-readable ingredient description, e.g. "2 cups basmati rice".
    pub original: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
