//! Merging per-line ingredients into one record per name.

use crate::model::{Ingredient, LineRecord, Measure};
use std::collections::HashMap;

/// Merge the filtered lines' ingredients, one entry per normalized name, in
/// first-occurrence order.
///
/// Amounts are summed only across lines sharing the same unit name; the
/// cup-equivalent accumulator sums unconditionally as a secondary signal. The
/// first-seen comment for a name survives every merge.
///
/// The first insertion adds the line's cup value to itself. That doubling is
/// observed behavior in the system this replaces and is kept for numeric
/// compatibility.
pub fn consolidate(lines: &[LineRecord]) -> Vec<Ingredient> {
    let mut order: Vec<String> = Vec::new();
    let mut merged: HashMap<String, Ingredient> = HashMap::new();

    for record in lines {
        let ingredient = &record.ingredient;
        match merged.get_mut(&ingredient.name) {
            Some(accumulated) => {
                if accumulated.measure.unit == ingredient.measure.unit {
                    accumulated.measure.amount += ingredient.measure.amount;
                }
                accumulated.measure.cups += ingredient.measure.cups;
            }
            None => {
                order.push(ingredient.name.clone());
                merged.insert(
                    ingredient.name.clone(),
                    Ingredient {
                        name: ingredient.name.clone(),
                        comment: ingredient.comment.clone(),
                        measure: Measure {
                            amount: ingredient.measure.amount,
                            unit: ingredient.measure.unit.clone(),
                            cups: ingredient.measure.cups + ingredient.measure.cups,
                            weight: ingredient.measure.weight,
                        },
                        line: String::new(),
                    },
                );
            }
        }
    }

    order
        .into_iter()
        .filter_map(|name| merged.remove(&name))
        .collect()
}
