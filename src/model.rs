use serde::Serialize;

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

/// A parsed recipe: the source document plus per-line detail and the
/// consolidated ingredient list.
#[derive(Debug, Default, Serialize)]
pub struct Recipe {
    /// Identifier for the document source, usually the URL it came from.
    pub source: String,
    /// The raw markup the recipe was extracted from.
    #[serde(skip_serializing)]
    pub content: String,
    /// Per-line detail for every line that survived filtering, in document order.
    pub lines: Vec<LineRecord>,
    /// Consolidated ingredients, one entry per normalized name, in
    /// first-occurrence order.
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Flattened per-line view: one `Ingredient` per surviving line with the
    /// original line text attached, in line order. Distinct from the
    /// consolidated `ingredients` field.
    pub fn ingredient_list(&self) -> IngredientList {
        IngredientList {
            ingredients: self
                .lines
                .iter()
                .map(|line| {
                    let mut ing = line.ingredient.clone();
                    ing.line = line.original.clone();
                    ing
                })
                .collect(),
        }
    }
}

/// Everything known about a single candidate line.
///
/// Created during line extraction, enriched during field extraction, and
/// dropped entirely if the line fails filtering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineRecord {
    /// The line as it appeared in the document.
    pub original: String,
    /// The sanitized form all dictionary matching runs against.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sanitized: String,
    /// Ingredient-corpus matches, ascending by offset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<WordOccurrence>,
    /// Number-corpus matches, ascending by offset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<WordOccurrence>,
    /// Measure-corpus matches, ascending by offset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<WordOccurrence>,
    /// The ingredient derived from this line.
    pub ingredient: Ingredient,
}

/// A matched dictionary term and its character offset in the sanitized line.
///
/// Offsets are post-mutation: each match is masked out of the working copy
/// before the next term is searched, so a term can only claim a region not
/// already taken by an earlier, higher-priority entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordOccurrence {
    pub word: String,
    pub position: usize,
}

/// A single extracted ingredient.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ingredient {
    /// Singular, lower-cased ingredient name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free text found between the measure and the name, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub measure: Measure,
    /// Original line text; only populated on per-line records.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub line: String,
}

/// How much of an ingredient is needed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Measure {
    /// Numeric amount, possibly fractional.
    pub amount: f64,
    /// Unit name; the literal `"whole"` when no unit word was found.
    pub unit: String,
    /// Cup-equivalent accumulator, used only for consolidation bookkeeping.
    pub cups: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub weight: f64,
}

/// A flattened, line-order sequence of per-line ingredients.
#[derive(Debug, Default, Serialize)]
pub struct IngredientList {
    pub ingredients: Vec<Ingredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_list_carries_line_text() {
        let recipe = Recipe {
            source: "test".to_string(),
            lines: vec![LineRecord {
                original: "1 cup flour".to_string(),
                ingredient: Ingredient {
                    name: "flour".to_string(),
                    ..Ingredient::default()
                },
                ..LineRecord::default()
            }],
            ..Recipe::default()
        };

        let list = recipe.ingredient_list();
        assert_eq!(list.ingredients.len(), 1);
        assert_eq!(list.ingredients[0].name, "flour");
        assert_eq!(list.ingredients[0].line, "1 cup flour");
    }

    #[test]
    fn test_empty_detail_fields_are_omitted() {
        let record = LineRecord {
            original: "toast".to_string(),
            ..LineRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("sanitized").is_none());
        assert!(json.get("ingredients").is_none());
        assert!(json.get("amounts").is_none());
        assert!(json.get("measures").is_none());
    }
}
