use crate::extract::IngredientList;
use crate::recommend::catalog::{Catalog, Recipe};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points for each needed ingredient found anywhere in the list
pub const BASE_WEIGHT: u32 = 1;
/// Extra points for each needed ingredient found among the primary ones
pub const PRIMARY_BOOST: u32 = 2;
/// How many leading ingredients count as primary
pub const PRIMARY_COUNT: usize = 2;
/// How many recipes a ranking returns
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub base_weight: u32,
    pub primary_boost: u32,
    pub primary_count: usize,
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_weight: BASE_WEIGHT,
            primary_boost: PRIMARY_BOOST,
            primary_count: PRIMARY_COUNT,
            max_results: MAX_RESULTS,
        }
    }
}

/// A recipe with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "matchCount")]
    pub score: u32,
}

/// Ingredient names prepared for repeated matching
#[derive(Debug)]
pub struct IngredientSet<'a> {
    items: &'a [String],
    lowered: Vec<String>,
}

impl<'a> IngredientSet<'a> {
    pub fn new(items: &'a [String]) -> Self {
        Self {
            items,
            lowered: items.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// True when `need` equals an ingredient exactly or ignoring case, or
    /// when either contains the other ignoring case.
    ///
    /// Short ingredients can over-match longer needs (e.g. "김" inside "김치").
    pub fn matches(&self, need: &str) -> bool {
        if self.items.iter().any(|item| item == need) {
            return true;
        }

        let need = need.to_lowercase();
        self.lowered.iter().any(|item| {
            *item == need || need.contains(item.as_str()) || item.contains(need.as_str())
        })
    }
}

/// Check one needed ingredient against a set of ingredient names
pub fn matches(ingredients: &[String], need: &str) -> bool {
    IngredientSet::new(ingredients).matches(need)
}

/// Score a single recipe. Needs listed twice are counted twice.
pub fn score_recipe(
    recipe: &Recipe,
    all: &IngredientSet<'_>,
    primary: &IngredientSet<'_>,
    weights: &ScoringWeights,
) -> u32 {
    let mut base = 0;
    let mut boost = 0;

    for need in &recipe.need {
        if all.matches(need) {
            base += weights.base_weight;
        }
        if primary.matches(need) {
            boost += weights.primary_boost;
        }
    }

    base + boost
}

/// Score every recipe in catalog order, dropping those that score zero
pub fn score_catalog(
    ingredients: &IngredientList,
    catalog: &Catalog,
    weights: &ScoringWeights,
) -> Vec<ScoredRecipe> {
    let all = IngredientSet::new(ingredients.as_slice());
    let primary = IngredientSet::new(ingredients.primary(weights.primary_count));

    let scored: Vec<ScoredRecipe> = catalog
        .all_recipes()
        .iter()
        .filter_map(|recipe| {
            let score = score_recipe(recipe, &all, &primary, weights);
            (score > 0).then(|| ScoredRecipe {
                recipe: recipe.clone(),
                score,
            })
        })
        .collect();

    debug!(
        "Scored {} of {} recipes for {} ingredients",
        scored.len(),
        catalog.len(),
        ingredients.len()
    );

    scored
}
