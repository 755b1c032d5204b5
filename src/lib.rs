pub mod config;
pub mod error;

// Ingredient extraction and recipe ranking
pub mod extract;
pub mod recommend;

// Upstream AI extraction
pub mod gemini;

// Interfaces
pub mod api;
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use extract::{Extraction, ExtractionSource, IngredientExtractor, IngredientList};
pub use recommend::{Catalog, RankedResult, Recipe, Recommender, ScoredRecipe};
