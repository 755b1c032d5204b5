// Recipe recommendation from receipt text
// Extraction -> scoring against the catalog -> ranking

pub mod catalog;
pub mod matcher;
pub mod ranker;

use crate::extract::{
    normalize, Extraction, ExtractionSource, IngredientExtractor, IngredientList, NaiveExtractor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

pub use catalog::{Catalog, Recipe};
pub use matcher::{matches, score_catalog, ScoredRecipe, ScoringWeights};
pub use ranker::rank;

/// Extracted ingredients and the recipes ranked for them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub ingredients: IngredientList,
    pub recipes: Vec<ScoredRecipe>,
    pub source: ExtractionSource,
}

/// Stateless recommendation pipeline shared by all requests
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    extractor: Option<Arc<dyn IngredientExtractor>>,
    naive: NaiveExtractor,
    weights: ScoringWeights,
}

impl Recommender {
    /// Pipeline over `catalog` with the built-in vocabulary and no upstream extractor
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            extractor: None,
            naive: NaiveExtractor::default(),
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn IngredientExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_naive_extractor(mut self, naive: NaiveExtractor) -> Self {
        self.naive = naive;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn has_extractor(&self) -> bool {
        self.extractor.is_some()
    }

    /// Extract ingredients, preferring the upstream extractor.
    ///
    /// Upstream errors and empty upstream answers fall back to the keyword
    /// scan; this never fails.
    pub async fn extract(&self, raw_text: &str) -> Extraction {
        if raw_text.trim().is_empty() {
            debug!("Empty receipt text, nothing to extract");
            return Extraction::naive(IngredientList::default());
        }

        if let Some(extractor) = &self.extractor {
            match extractor.extract_ingredients(raw_text).await {
                Ok(answer) => {
                    let ingredients = normalize(&answer);
                    if !ingredients.is_empty() {
                        debug!(
                            "{} extracted {} ingredients",
                            extractor.name(),
                            ingredients.len()
                        );
                        return Extraction::ai(ingredients);
                    }
                    warn!(
                        "{} returned no ingredients, falling back to keyword scan",
                        extractor.name()
                    );
                }
                Err(e) => {
                    warn!(
                        "{} extraction failed, falling back to keyword scan: {}",
                        extractor.name(),
                        e.log_safe()
                    );
                }
            }
        }

        Extraction::naive(self.naive.extract(raw_text))
    }

    /// Extract with the keyword scan only
    pub fn extract_naive(&self, raw_text: &str) -> Extraction {
        Extraction::naive(self.naive.extract(raw_text))
    }

    /// Score and rank the catalog for an already extracted list
    pub fn rank_extraction(&self, extraction: Extraction) -> RankedResult {
        let scored = score_catalog(&extraction.ingredients, &self.catalog, &self.weights);
        let recipes = rank(scored, self.weights.max_results);

        RankedResult {
            ingredients: extraction.ingredients,
            recipes,
            source: extraction.source,
        }
    }

    /// Full pipeline: extract, score, rank
    pub async fn recommend(&self, raw_text: &str) -> RankedResult {
        let extraction = self.extract(raw_text).await;
        self.rank_extraction(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result};
    use async_trait::async_trait;

    struct FixedExtractor(&'static str);

    #[async_trait]
    impl IngredientExtractor for FixedExtractor {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn extract_ingredients(&self, _text: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl IngredientExtractor for FailingExtractor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn extract_ingredients(&self, _text: &str) -> Result<String> {
            Err(Error::Upstream("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_ai_extraction_is_normalized() {
        let recommender = Recommender::new(Catalog::builtin())
            .with_extractor(Arc::new(FixedExtractor("사과\n양파, 사과")));

        let extraction = recommender.extract("영수증").await;
        assert_eq!(extraction.source, ExtractionSource::Ai);
        assert_eq!(extraction.ingredients.as_slice(), ["사과", "양파"]);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_keywords() {
        let recommender =
            Recommender::new(Catalog::builtin()).with_extractor(Arc::new(FailingExtractor));

        let extraction = recommender.extract("계란 두 개 구매").await;
        assert_eq!(extraction.source, ExtractionSource::Naive);
        assert_eq!(extraction.ingredients.as_slice(), ["계란"]);
    }

    #[tokio::test]
    async fn test_blank_ai_answer_falls_back_to_keywords() {
        let recommender =
            Recommender::new(Catalog::builtin()).with_extractor(Arc::new(FixedExtractor(" , ")));

        let extraction = recommender.extract("우유 1L").await;
        assert_eq!(extraction.source, ExtractionSource::Naive);
        assert_eq!(extraction.ingredients.as_slice(), ["우유"]);
    }

    #[tokio::test]
    async fn test_empty_input_skips_upstream() {
        let recommender = Recommender::new(Catalog::builtin())
            .with_extractor(Arc::new(FixedExtractor("사과")));

        let result = recommender.recommend("   ").await;
        assert!(result.ingredients.is_empty());
        assert!(result.recipes.is_empty());
        assert_eq!(result.source, ExtractionSource::Naive);
    }

    #[test]
    fn test_rank_extraction_respects_max_results() {
        let weights = ScoringWeights {
            max_results: 2,
            ..Default::default()
        };
        let recommender = Recommender::new(Catalog::builtin()).with_weights(weights);

        let result = recommender.rank_extraction(recommender.extract_naive("계란 우유 치즈"));
        assert_eq!(result.recipes.len(), 2);
        assert!(result.recipes[0].score >= result.recipes[1].score);
    }
}
