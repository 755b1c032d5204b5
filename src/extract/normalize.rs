use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, case-insensitively unique list of ingredient names.
///
/// The first occurrence of each name keeps its original casing and position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    /// Build a list from arbitrary tokens, trimming them and dropping blanks
    /// and case-insensitive duplicates.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.to_lowercase()) {
                items.push(token.to_string());
            }
        }

        Self(items)
    }

    /// The first `count` ingredients, the ones scored with the primary boost
    pub fn primary(&self, count: usize) -> &[String] {
        &self.0[..count.min(self.0.len())]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split comma or line separated text into an [`IngredientList`].
///
/// Every Unicode line break counts (LF, CR, VT, FF, NEL, LS, PS), and runs
/// of them act as a single separator. Empty input yields an empty list.
pub fn normalize(text: &str) -> IngredientList {
    IngredientList::from_tokens(text.split(is_separator))
}

fn is_separator(c: char) -> bool {
    matches!(
        c,
        ',' | '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("  , ,\n\n").is_empty());
    }

    #[test]
    fn test_normalize_dedupes_case_insensitively() {
        assert_eq!(normalize("A,a,B").as_slice(), ["A", "B"]);
        assert_eq!(
            normalize("Tomato, onion, TOMATO, Onion").as_slice(),
            ["Tomato", "onion"]
        );
    }

    #[test]
    fn test_normalize_line_breaks() {
        let list = normalize("사과\n\n양파\r\n햄, 치즈");
        assert_eq!(list.as_slice(), ["사과", "양파", "햄", "치즈"]);
    }

    #[test]
    fn test_normalize_unicode_line_breaks() {
        let list = normalize("사과\u{2028}양파\u{0085}햄");
        assert_eq!(list.as_slice(), ["사과", "양파", "햄"]);

        let list = normalize("치즈\u{000B}우유\u{000C}빵\u{2029}\u{2029}감자");
        assert_eq!(list.as_slice(), ["치즈", "우유", "빵", "감자"]);
    }

    #[test]
    fn test_normalize_trims_pieces() {
        let list = normalize("  사과 ,   딸기 요거트  ,");
        assert_eq!(list.as_slice(), ["사과", "딸기 요거트"]);
    }

    #[test]
    fn test_primary_is_capped_by_length() {
        let list = normalize("rice");
        assert_eq!(list.primary(2), ["rice"]);

        let list = normalize("rice, egg, carrot");
        assert_eq!(list.primary(2), ["rice", "egg"]);
        assert!(list.primary(0).is_empty());
    }
}
