//! Turns an arbitrary recipe web page into a normalized ingredient list.
//!
//! The pipeline runs strictly forward: fetch, candidate-line extraction
//! (structured script data short-circuits the markup walk), per-line
//! sanitizing and scoring, field extraction, and consolidation of duplicate
//! ingredient names. A structurally valid page with no ingredient-like
//! content is not an error; it yields a recipe with an empty ingredient
//! list.

pub mod batch;
pub mod config;
pub mod consolidate;
pub mod corpus;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod fields;
pub mod model;
pub mod sanitize;
pub mod score;

use log::debug;
use scraper::Html;

pub use crate::batch::extract_from_urls;
pub use crate::config::FetchConfig;
pub use crate::error::ExtractError;
pub use crate::model::{Ingredient, IngredientList, LineRecord, Measure, Recipe, WordOccurrence};

/// Shortest and longest trimmed sanitized line considered at all.
const MIN_LINE_LEN: usize = 3;
const MAX_LINE_LEN: usize = 150;

/// Extract a recipe from raw document markup.
///
/// `source` identifies where the document came from (usually its URL) and
/// must not be empty. Lines that fail filtering are dropped silently; the
/// call fails only when the input itself is unusable.
pub fn extract(source: &str, document: &str) -> Result<Recipe, ExtractError> {
    if source.is_empty() || document.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let html = Html::parse_document(document);
    let candidates = extractors::ingredient_lines(&html);
    debug!("{} candidate lines from {source}", candidates.len());

    let mut lines = Vec::new();
    for mut record in candidates {
        let trimmed = record.sanitized.trim();
        if trimmed.len() < MIN_LINE_LEN || trimmed.len() > MAX_LINE_LEN {
            continue;
        }
        // metadata lines that score like ingredients but never are
        if record.sanitized.contains("serving size") || record.sanitized.contains("yield") {
            continue;
        }

        record.ingredient.measure = Measure::default();
        if !fields::extract_fields(&mut record) {
            continue;
        }
        lines.push(record);
    }

    let ingredients = consolidate::consolidate(&lines);
    debug!(
        "{source}: {} lines kept, {} consolidated ingredients",
        lines.len(),
        ingredients.len()
    );

    Ok(Recipe {
        source: source.to_string(),
        content: document.to_string(),
        lines,
        ingredients,
    })
}

/// Fetch a URL and extract a recipe from its body.
///
/// Performs a single GET bounded by the configured timeout (10 seconds by
/// default), then hands the body to [`extract`] with the URL as the source
/// identifier.
pub fn extract_from_url(url: &str) -> Result<Recipe, ExtractError> {
    let config = FetchConfig::load()?;
    let body = fetch::fetch_document(url, &config)?;
    extract(url, &body)
}
