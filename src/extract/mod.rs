// Ingredient extraction from raw receipt text
// Upstream AI extraction with a local keyword scan as fallback

pub mod naive;
pub mod normalize;

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use naive::{builtin_vocabulary, NaiveExtractor, SynonymGroup};
pub use normalize::{normalize, IngredientList};

/// Upstream collaborator that turns OCR text into a comma separated
/// ingredient string.
#[async_trait]
pub trait IngredientExtractor: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn extract_ingredients(&self, text: &str) -> Result<String>;
}

/// Which strategy produced an ingredient list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    Ai,
    Naive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub ingredients: IngredientList,
    pub source: ExtractionSource,
}

impl Extraction {
    pub fn ai(ingredients: IngredientList) -> Self {
        Self {
            ingredients,
            source: ExtractionSource::Ai,
        }
    }

    pub fn naive(ingredients: IngredientList) -> Self {
        Self {
            ingredients,
            source: ExtractionSource::Naive,
        }
    }
}
