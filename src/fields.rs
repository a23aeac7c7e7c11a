//! Field derivation for lines that passed scoring.

use crate::corpus::{cups_factor, singularize};
use crate::model::{LineRecord, WordOccurrence};
use crate::sanitize::parse_number;
use log::warn;

/// Window, in characters, within which consecutive number tokens are summed
/// as one mixed amount ("1 1/2").
const ADJACENCY_WINDOW: usize = 6;

/// Sum the line's number occurrences into a single amount.
///
/// The first occurrence seeds the total; later ones are added only when they
/// start within the adjacency window of the previous occurrence's end. A line
/// with no number but containing "whole" counts as 1. Returns `None` when the
/// total comes out 0, which drops the line.
pub fn total_amount(record: &LineRecord) -> Option<f64> {
    let mut total = 0.0;
    let mut last_end: Option<usize> = None;
    for occurrence in &record.amounts {
        let word = occurrence.word.trim();
        match last_end {
            None => total = parse_number(word),
            Some(end) => {
                if occurrence.position.abs_diff(end) < ADJACENCY_WINDOW {
                    total += parse_number(word);
                }
            }
        }
        last_end = Some(occurrence.position + word.len());
    }
    if total == 0.0 && record.sanitized.contains("whole") {
        total = 1.0;
    }
    if total == 0.0 {
        None
    } else {
        Some(total)
    }
}

/// The free text strictly between the end of the measure match and the start
/// of the ingredient match, against the sanitized line.
///
/// All slicing is bounds-checked; an out-of-range window degrades to an empty
/// comment rather than aborting the extraction.
fn comment_between(sanitized: &str, measure: &WordOccurrence, ingredient: &WordOccurrence) -> String {
    if measure.position > ingredient.position {
        return String::new();
    }
    let start = measure.position + measure.word.len() + 1;
    let end = ingredient.position;
    match sanitized.get(start..end) {
        Some(comment) => comment.trim().to_string(),
        None => {
            warn!(
                "comment window {start}..{end} out of range for line {sanitized:?}"
            );
            String::new()
        }
    }
}

/// Populate the line's `Ingredient` from its tagged occurrences.
///
/// Returns false when the line has no usable amount or no ingredient match;
/// such lines are dropped silently by the caller.
pub fn extract_fields(record: &mut LineRecord) -> bool {
    let Some(amount) = total_amount(record) else {
        return false;
    };
    let Some(first_ingredient) = record.ingredients.first() else {
        return false;
    };

    record.ingredient.name = singularize(&first_ingredient.word);
    record.ingredient.measure.amount = amount;
    record.ingredient.measure.unit = record
        .measures
        .first()
        .map(|m| m.word.clone())
        .unwrap_or_else(|| "whole".to_string());
    record.ingredient.measure.cups = amount * cups_factor(&record.ingredient.measure.unit);

    if let (Some(measure), Some(ingredient)) =
        (record.measures.first(), record.ingredients.first())
    {
        record.ingredient.comment = comment_between(&record.sanitized, measure, ingredient);
    }
    true
}
