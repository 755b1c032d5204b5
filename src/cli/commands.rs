use crate::cli::ReceiptInput;
use crate::config::catalog::CatalogFile;
use crate::extract::{Extraction, ExtractionSource};
use crate::recommend::{Catalog, RankedResult, Recommender};
use crate::{Error, Result};
use std::fmt::Write as _;
use std::io::Read;

/// Read receipt text from the argument, a file, or stdin
pub fn read_input(input: &ReceiptInput) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return std::fs::read_to_string(path).map_err(|e| {
            Error::Validation(format!("Failed to read receipt file {path}: {e}"))
        });
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

async fn run_extraction(recommender: &Recommender, input: &ReceiptInput) -> Result<Extraction> {
    let text = read_input(input)?;
    Ok(if input.naive {
        recommender.extract_naive(&text)
    } else {
        recommender.extract(&text).await
    })
}

/// Recommend recipes for receipt text
pub async fn recommend(recommender: &Recommender, input: &ReceiptInput, json: bool) -> Result<()> {
    let extraction = run_extraction(recommender, input).await?;
    let result = recommender.rank_extraction(extraction);

    if json {
        let payload = serde_json::to_string_pretty(&result)
            .map_err(|e| Error::Internal(format!("Failed to serialize result: {e}")))?;
        println!("{payload}");
    } else {
        print!("{}", format_result(&result));
    }

    Ok(())
}

/// Print extracted ingredients, one per line
pub async fn ingredients(recommender: &Recommender, input: &ReceiptInput) -> Result<()> {
    let extraction = run_extraction(recommender, input).await?;

    if extraction.ingredients.is_empty() {
        println!("No ingredients found");
        return Ok(());
    }

    for ingredient in &extraction.ingredients {
        println!("{ingredient}");
    }
    eprintln!("(source: {})", source_label(extraction.source));

    Ok(())
}

/// Print every recipe in the catalog
pub fn list_recipes(catalog: &Catalog) {
    for (index, recipe) in catalog.all_recipes().iter().enumerate() {
        println!("{:>3}. {} [{}]", index + 1, recipe.name, recipe.need.join(", "));
    }
    println!("\n{} recipes", catalog.len());
}

/// Validate a YAML catalog file
pub fn check_catalog(path: &str) -> Result<()> {
    let file = CatalogFile::from_file(path)?;

    println!("✓ Catalog is valid: {path}");
    println!("  Recipes: {}", file.recipes.len());
    if !file.vocabulary.is_empty() {
        println!("  Vocabulary groups: {}", file.vocabulary.len());
    }

    Ok(())
}

fn source_label(source: ExtractionSource) -> &'static str {
    match source {
        ExtractionSource::Ai => "AI extraction",
        ExtractionSource::Naive => "keyword scan",
    }
}

/// Human readable rendering of a ranking
pub fn format_result(result: &RankedResult) -> String {
    let mut out = String::new();

    if result.ingredients.is_empty() {
        let _ = writeln!(out, "No ingredients found");
    } else {
        let _ = writeln!(
            out,
            "Ingredients ({}): {}",
            source_label(result.source),
            result.ingredients.as_slice().join(", ")
        );
    }

    if result.recipes.is_empty() {
        let _ = writeln!(out, "No matching recipes");
        return out;
    }

    let _ = writeln!(out);
    for (index, scored) in result.recipes.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} (score {})",
            index + 1,
            scored.recipe.name,
            scored.score
        );
        let _ = writeln!(out, "   Needs: {}", scored.recipe.need.join(", "));
        if !scored.recipe.desc.is_empty() {
            let _ = writeln!(out, "   {}", scored.recipe.desc);
        }
    }

    out
}
