use crate::recommend::matcher::ScoredRecipe;

/// Order recipes by descending score and keep the first `limit`.
///
/// Equal scores keep their incoming (catalog) order.
pub fn rank(mut scored: Vec<ScoredRecipe>, limit: usize) -> Vec<ScoredRecipe> {
    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::catalog::Recipe;

    fn scored(name: &str, score: u32) -> ScoredRecipe {
        ScoredRecipe {
            recipe: Recipe::new(name, &["x"], ""),
            score,
        }
    }

    fn names(ranked: &[ScoredRecipe]) -> Vec<&str> {
        ranked.iter().map(|s| s.recipe.name.as_str()).collect()
    }

    #[test]
    fn test_rank_is_stable_descending() {
        let input = vec![scored("a", 3), scored("b", 3), scored("c", 1), scored("d", 5)];
        let ranked = rank(input, 5);
        assert_eq!(names(&ranked), ["d", "a", "b", "c"]);
    }

    #[test]
    fn test_rank_truncates() {
        let input = (0..8).map(|i| scored(&format!("r{i}"), i)).collect();
        let ranked = rank(input, 5);
        assert_eq!(names(&ranked), ["r7", "r6", "r5", "r4", "r3"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new(), 5).is_empty());
    }
}
