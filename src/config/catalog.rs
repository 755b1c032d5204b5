use crate::error::{Error, Result};
use crate::extract::SynonymGroup;
use crate::recommend::{Catalog, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Recipe catalog loaded from a YAML file, replacing the built-in one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub vocabulary: Vec<SynonymGroup>,
}

impl CatalogFile {
    /// Load and validate a catalog from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read recipe catalog from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let file: CatalogFile = serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse recipe catalog from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported catalog version: {}. Expected version 1",
                self.version
            )));
        }

        if self.recipes.is_empty() {
            return Err(Error::Config("Catalog has no recipes".to_string()));
        }

        let mut seen = HashSet::new();
        for (index, recipe) in self.recipes.iter().enumerate() {
            validate_recipe(recipe).map_err(|e| {
                Error::Config(format!("Recipe #{} ({}): {}", index + 1, recipe.name, e))
            })?;

            if !seen.insert(recipe.name.trim()) {
                return Err(Error::Config(format!(
                    "Duplicate recipe name: {}",
                    recipe.name
                )));
            }
        }

        for (index, group) in self.vocabulary.iter().enumerate() {
            if group.canonical.trim().is_empty() {
                return Err(Error::Config(format!(
                    "Vocabulary group #{} has an empty canonical name",
                    index + 1
                )));
            }
            if group.synonyms.iter().all(|s| s.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "Vocabulary group #{} ({}) has no synonyms",
                    index + 1,
                    group.canonical
                )));
            }
        }

        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.recipes.clone())
    }

    /// Custom keyword vocabulary, if the file defines one
    pub fn vocabulary(&self) -> Option<Vec<SynonymGroup>> {
        (!self.vocabulary.is_empty()).then(|| self.vocabulary.clone())
    }
}

fn validate_recipe(recipe: &Recipe) -> std::result::Result<(), String> {
    if recipe.name.trim().is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }
    if recipe.need.is_empty() {
        return Err("Recipe must need at least one ingredient".to_string());
    }
    if recipe.need.iter().any(|need| need.trim().is_empty()) {
        return Err("Needed ingredients cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = create_test_catalog(
            r#"
version: 1
recipes:
  - name: "감자조림"
    need: ["감자", "양파", "간장", "설탕"]
    desc: "감자를 간장에 조립니다."
  - name: "계란찜"
    need: ["계란"]
    desc: "계란을 찝니다."
vocabulary:
  - canonical: "감자"
    synonyms: ["감자", "potato"]
"#,
        );

        let catalog_file = CatalogFile::from_file(file.path()).unwrap();
        let catalog = catalog_file.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all_recipes()[0].name, "감자조림");
        assert_eq!(catalog.all_recipes()[0].need.len(), 4);

        let vocabulary = catalog_file.vocabulary().unwrap();
        assert_eq!(vocabulary[0].canonical, "감자");
    }

    #[test]
    fn test_vocabulary_is_optional() {
        let file = create_test_catalog(
            r#"
version: 1
recipes:
  - name: "toast"
    need: ["bread"]
    desc: ""
"#,
        );

        let catalog_file = CatalogFile::from_file(file.path()).unwrap();
        assert!(catalog_file.vocabulary().is_none());
    }

    #[test]
    fn test_reject_duplicate_names() {
        let file = create_test_catalog(
            r#"
version: 1
recipes:
  - name: "toast"
    need: ["bread"]
    desc: ""
  - name: "toast"
    need: ["bread", "butter"]
    desc: ""
"#,
        );

        let err = CatalogFile::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate recipe name"));
    }

    #[test]
    fn test_reject_blank_need() {
        let file = create_test_catalog(
            r#"
version: 1
recipes:
  - name: "toast"
    need: ["bread", "  "]
    desc: ""
"#,
        );

        assert!(CatalogFile::from_file(file.path()).is_err());
    }

    #[test]
    fn test_reject_wrong_version() {
        let file = create_test_catalog(
            r#"
version: 2
recipes:
  - name: "toast"
    need: ["bread"]
    desc: ""
"#,
        );

        let err = CatalogFile::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported catalog version"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CatalogFile::from_file("/nonexistent/catalog.yaml"),
            Err(Error::Config(_))
        ));
    }
}
