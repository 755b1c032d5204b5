use crate::extract::normalize::IngredientList;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Keywords that all map to one canonical ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl SynonymGroup {
    pub fn new(canonical: &str, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Built-in staples: (canonical, synonyms)
///
/// English keywords that sit inside common receipt words ("rice" in "price",
/// "apple" in "pineapple", "egg" in "eggplant") are left out.
const BUILTIN_VOCABULARY: &[(&str, &[&str])] = &[
    ("계란", &["계란", "달걀", "eggs"]),
    ("밥", &["밥", "쌀"]),
    ("김치", &["김치", "kimchi"]),
    ("양파", &["양파", "onion"]),
    ("감자", &["감자", "potato"]),
    ("당근", &["당근", "carrot"]),
    ("사과", &["사과"]),
    ("치즈", &["치즈", "cheese"]),
    ("베이컨", &["베이컨", "bacon"]),
    ("빵", &["식빵", "빵", "bread"]),
    ("토마토", &["토마토", "tomato"]),
    ("참치", &["참치", "tuna"]),
    ("요거트", &["요거트", "요구르트", "yogurt", "yoghurt"]),
    ("우유", &["우유", "milk"]),
    ("돼지고기", &["돼지고기", "삼겹살", "pork"]),
];

/// Keyword scanner used when upstream AI extraction is unavailable.
#[derive(Debug, Clone)]
pub struct NaiveExtractor {
    vocabulary: Vec<SynonymGroup>,
}

impl Default for NaiveExtractor {
    fn default() -> Self {
        Self::new(builtin_vocabulary())
    }
}

impl NaiveExtractor {
    pub fn new(vocabulary: Vec<SynonymGroup>) -> Self {
        // Matching runs against lowercased text
        let vocabulary = vocabulary
            .into_iter()
            .map(|group| SynonymGroup {
                canonical: group.canonical,
                synonyms: group.synonyms.iter().map(|s| s.to_lowercase()).collect(),
            })
            .collect();

        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &[SynonymGroup] {
        &self.vocabulary
    }

    /// Scan `text` for known keywords, returning canonical names in
    /// vocabulary order. Never fails; empty text yields an empty list.
    pub fn extract(&self, text: &str) -> IngredientList {
        if text.trim().is_empty() {
            return IngredientList::default();
        }

        let lower = text.to_lowercase();
        let found = self.vocabulary.iter().filter_map(|group| {
            group
                .synonyms
                .iter()
                .find(|synonym| !synonym.is_empty() && lower.contains(synonym.as_str()))
                .map(|_| group.canonical.as_str())
        });

        let list = IngredientList::from_tokens(found);
        debug!("Keyword scan matched {} ingredients", list.len());
        list
    }
}

pub fn builtin_vocabulary() -> Vec<SynonymGroup> {
    BUILTIN_VOCABULARY
        .iter()
        .map(|(canonical, synonyms)| SynonymGroup::new(canonical, synonyms))
        .collect()
}
