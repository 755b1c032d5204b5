use serde::{Deserialize, Serialize};

use crate::extract::{ExtractionSource, IngredientList};
use crate::recommend::Recipe;

/// Receipt text request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptText {
    /// Raw OCR text; absent or null is treated as empty
    #[serde(default)]
    pub text: Option<String>,
}

impl ReceiptText {
    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Ingredient extraction response
#[derive(Debug, Clone, Serialize)]
pub struct IngredientsResponse {
    pub ingredients: IngredientList,
    pub source: ExtractionSource,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub catalog_size: usize,
    pub ai_extraction: String,
}
