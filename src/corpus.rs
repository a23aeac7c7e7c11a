//! Static dictionaries used for substring tagging.
//!
//! Each corpus is built once at first use and never mutated afterwards. Terms
//! are stored padded with a leading and trailing space so a match is always
//! word-bounded against the space-padded sanitized line, and ordered longest
//! first so the greedy masking matcher prefers " olive oil " over " oil ".

use crate::sanitize::FRACTIONS;
use std::sync::LazyLock;

const INGREDIENT_TERMS: &[&str] = &[
    // multi-word entries
    "worcestershire sauce",
    "apple cider vinegar",
    "whole wheat flour",
    "all purpose flour",
    "red pepper flakes",
    "balsamic vinegar",
    "granulated sugar",
    "vanilla extract",
    "chocolate chips",
    "powdered sugar",
    "chicken breasts",
    "chicken breast",
    "dijon mustard",
    "peanut butter",
    "baking powder",
    "black pepper",
    "cream cheese",
    "garlic powder",
    "green onions",
    "green onion",
    "heavy cream",
    "lemon juice",
    "maple syrup",
    "onion powder",
    "orange juice",
    "sweet potatoes",
    "sweet potato",
    "almond milk",
    "baking soda",
    "bell pepper",
    "brown sugar",
    "chili powder",
    "cocoa powder",
    "coconut milk",
    "lime juice",
    "sesame oil",
    "sour cream",
    "soy sauce",
    "tomato paste",
    "tomato sauce",
    "olive oil",
    "red onion",
    "red wine",
    "white wine",
    // single-word entries, plural before singular where both occur
    "anchovies",
    "artichokes",
    "artichoke",
    "asparagus",
    "avocados",
    "avocado",
    "bacon",
    "bananas",
    "banana",
    "basil",
    "beans",
    "beef",
    "beer",
    "beets",
    "beet",
    "blueberries",
    "bread",
    "breadcrumbs",
    "broccoli",
    "broth",
    "butter",
    "buttermilk",
    "cabbage",
    "capers",
    "carrots",
    "carrot",
    "cauliflower",
    "cayenne",
    "celery",
    "cheddar",
    "cheese",
    "cherries",
    "chicken",
    "chickpeas",
    "chives",
    "chocolate",
    "cilantro",
    "cinnamon",
    "coconut",
    "corn",
    "cornstarch",
    "crackers",
    "cranberries",
    "cucumbers",
    "cucumber",
    "cumin",
    "dates",
    "dill",
    "eggplant",
    "eggs",
    "egg",
    "figs",
    "fish",
    "flour",
    "garlic",
    "ginger",
    "ham",
    "honey",
    "kale",
    "ketchup",
    "lamb",
    "leeks",
    "leek",
    "lemons",
    "lemon",
    "lentils",
    "lettuce",
    "limes",
    "lime",
    "mangoes",
    "mango",
    "marshmallows",
    "mayonnaise",
    "milk",
    "mint",
    "molasses",
    "mozzarella",
    "mushrooms",
    "mushroom",
    "mustard",
    "noodles",
    "nutmeg",
    "oats",
    "oil",
    "olives",
    "onions",
    "onion",
    "oranges",
    "orange",
    "oregano",
    "paprika",
    "parmesan",
    "parsley",
    "pasta",
    "peaches",
    "peach",
    "pears",
    "pear",
    "peas",
    "pecans",
    "pepper",
    "pineapple",
    "pork",
    "potatoes",
    "potato",
    "pumpkin",
    "quinoa",
    "raisins",
    "raspberries",
    "rice",
    "rosemary",
    "sage",
    "salmon",
    "salsa",
    "salt",
    "sausage",
    "scallions",
    "shallots",
    "shallot",
    "shortening",
    "shrimp",
    "spaghetti",
    "spinach",
    "squash",
    "steak",
    "stock",
    "strawberries",
    "sugar",
    "tahini",
    "thyme",
    "tofu",
    "tomatoes",
    "tomato",
    "turkey",
    "turmeric",
    "vanilla",
    "vinegar",
    "walnuts",
    "water",
    "wine",
    "yeast",
    "yogurt",
    "zucchini",
];

const MEASURE_TERMS: &[&str] = &[
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "milliliters",
    "milliliter",
    "kilograms",
    "kilogram",
    "packages",
    "package",
    "gallons",
    "gallon",
    "bunches",
    "bunch",
    "cloves",
    "clove",
    "ounces",
    "ounce",
    "pinches",
    "pinch",
    "pounds",
    "pound",
    "quarts",
    "quart",
    "slices",
    "slice",
    "sprigs",
    "sprig",
    "sticks",
    "stick",
    "dashes",
    "dash",
    "grams",
    "gram",
    "heads",
    "head",
    "liters",
    "liter",
    "pints",
    "pint",
    "cans",
    "can",
    "cups",
    "cup",
    "tbsp",
    "whole",
    "tsp",
    "lbs",
    "lb",
    "ml",
    "oz",
    "kg",
    "g",
];

const ASCII_FRACTIONS: &[&str] = &[
    "1/2", "1/3", "2/3", "1/4", "3/4", "1/8", "3/8", "5/8", "7/8",
];

fn pad_longest_first<I: IntoIterator<Item = String>>(terms: I) -> Vec<String> {
    let mut padded: Vec<String> = terms.into_iter().map(|t| format!(" {t} ")).collect();
    // stable: equal-length terms keep their listed order
    padded.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    padded
}

/// Ingredient name dictionary, padded and ordered longest first.
pub static INGREDIENTS: LazyLock<Vec<String>> =
    LazyLock::new(|| pad_longest_first(INGREDIENT_TERMS.iter().map(|t| t.to_string())));

/// Measurement unit dictionary, padded and ordered longest first.
pub static MEASURES: LazyLock<Vec<String>> =
    LazyLock::new(|| pad_longest_first(MEASURE_TERMS.iter().map(|t| t.to_string())));

/// Number dictionary: decimal fraction forms, ASCII fractions, and the
/// integers 100 down to 0, padded and ordered longest first.
pub static NUMBERS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let decimals = FRACTIONS.iter().map(|f| f.decimal.to_string());
    let fractions = ASCII_FRACTIONS.iter().map(|t| t.to_string());
    let integers = (0..=100u32).rev().map(|n| n.to_string());
    pad_longest_first(decimals.chain(fractions).chain(integers))
});

/// Cup-equivalent factor for a unit name; 0 when the unit has no sensible
/// volume conversion.
pub fn cups_factor(unit: &str) -> f64 {
    match unit {
        "cup" | "cups" => 1.0,
        "tablespoon" | "tablespoons" | "tbsp" => 1.0 / 16.0,
        "teaspoon" | "teaspoons" | "tsp" => 1.0 / 48.0,
        "pint" | "pints" => 2.0,
        "quart" | "quarts" => 4.0,
        "gallon" | "gallons" => 16.0,
        "ounce" | "ounces" | "oz" => 1.0 / 8.0,
        "milliliter" | "milliliters" | "ml" => 1.0 / 236.588,
        "liter" | "liters" => 4.226_75,
        _ => 0.0,
    }
}

const IRREGULAR_SINGULARS: &[(&str, &str)] = &[
    ("molasses", "molasses"),
    ("asparagus", "asparagus"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
];

/// Reduce a matched ingredient name to its singular form.
///
/// Suffix rules apply to the last word, so "chocolate chips" becomes
/// "chocolate chip".
pub fn singularize(name: &str) -> String {
    for (plural, singular) in IRREGULAR_SINGULARS {
        if let Some(stem) = name.strip_suffix(plural) {
            return format!("{stem}{singular}");
        }
    }
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = name.strip_suffix("oes") {
        return format!("{stem}o");
    }
    for suffix in ["ches", "shes", "sses", "xes"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if name.ends_with('s') && !name.ends_with("ss") && !name.ends_with("us") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}
