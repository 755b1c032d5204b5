use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::{api::models::*, recommend::RankedResult, recommend::Recommender, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

/// POST /api/recommend - Rank recipes for receipt text
pub async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<ReceiptText>,
) -> Result<Json<RankedResult>> {
    debug!("Recommend request: {} bytes of text", body.as_str().len());

    let result = state.recommender.recommend(body.as_str()).await;

    debug!(
        "Recommended {} recipes from {} ingredients ({:?})",
        result.recipes.len(),
        result.ingredients.len(),
        result.source
    );

    Ok(Json(result))
}

/// POST /api/ingredients - Extract ingredients only
pub async fn extract_ingredients(
    State(state): State<AppState>,
    Json(body): Json<ReceiptText>,
) -> Result<Json<IngredientsResponse>> {
    debug!("Ingredients request: {} bytes of text", body.as_str().len());

    let extraction = state.recommender.extract(body.as_str()).await;

    Ok(Json(IngredientsResponse {
        ingredients: extraction.ingredients,
        source: extraction.source,
    }))
}

/// GET /api/recipes - List the catalog
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<RecipesResponse>> {
    debug!("List recipes request");

    let recipes = state.recommender.catalog().all_recipes().to_vec();
    let total = recipes.len();

    Ok(Json(RecipesResponse { recipes, total }))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    let catalog_size = state.recommender.catalog().len();

    Ok(Json(ReadinessResponse {
        ready: catalog_size > 0,
        catalog_size,
        ai_extraction: if state.recommender.has_extractor() {
            "enabled"
        } else {
            "disabled"
        }
        .to_string(),
    }))
}
