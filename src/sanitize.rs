//! Lexical normalization of raw candidate lines.
//!
//! Every line goes through the same deterministic transform before any
//! dictionary matching. The transform is idempotent: running it over its own
//! output yields the same string.

use regex::Regex;
use std::sync::LazyLock;

/// Unicode vulgar fractions with their decimal string form and numeric value.
///
/// The sanitizer and the number converter must share this table: glyphs are
/// rewritten to the decimal form before the character strip (which would
/// otherwise eat them), then the decimal forms are re-padded with spaces so
/// they survive as distinct tokens.
pub(crate) struct Fraction {
    pub glyph: &'static str,
    pub decimal: &'static str,
    pub value: f64,
}

pub(crate) const FRACTIONS: &[Fraction] = &[
    Fraction { glyph: "½", decimal: "0.5", value: 0.5 },
    Fraction { glyph: "¼", decimal: "0.25", value: 0.25 },
    Fraction { glyph: "¾", decimal: "0.75", value: 0.75 },
    Fraction { glyph: "⅛", decimal: "0.125", value: 1.0 / 8.0 },
    Fraction { glyph: "⅜", decimal: "0.375", value: 3.0 / 8.0 },
    Fraction { glyph: "⅝", decimal: "0.625", value: 5.0 / 8.0 },
    Fraction { glyph: "⅞", decimal: "0.875", value: 7.0 / 8.0 },
    Fraction { glyph: "⅔", decimal: "0.66", value: 2.0 / 3.0 },
    Fraction { glyph: "⅓", decimal: "0.33", value: 1.0 / 3.0 },
];

/// Fixed lexical corrections applied before any other rewriting.
const LEXICAL_FIXES: &[(&str, &str)] = &[
    ("butter milk", "buttermilk"),
    ("bicarbonate of soda", "baking soda"),
    ("soda bicarbonate", "baking soda"),
];

/// Greedy, dot-matches-newline span of parentheses, including nesting.
static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\(.*\)").unwrap());

/// Runs of anything that is not alphanumeric, `/` or `.`.
static NON_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9/.]+").unwrap());

/// Normalize one raw text line for dictionary matching.
///
/// The output contains only lower-case alphanumerics, `/`, `.` and spaces,
/// padded with a leading and trailing space so corpus terms can match on
/// word boundaries.
pub fn sanitize_line(line: &str) -> String {
    let mut s = line.to_lowercase();

    // fraction slash, both the real glyph and its common mis-encoding
    s = s.replace('\u{2044}', "/");
    s = s.replace("‚ÅÑ", "/");
    s = s.replace(" / ", "/");

    for (from, to) in LEXICAL_FIXES {
        s = s.replace(from, to);
    }

    // remove parenthesized spans entirely
    s = PARENTHETICAL.replace_all(&s, " ").into_owned();

    s = format!(" {} ", s.trim());

    // vulgar fractions become space-bounded decimal tokens
    for fraction in FRACTIONS {
        s = s.replace(fraction.glyph, &format!(" {} ", fraction.decimal));
    }

    // strip everything that is not alphanumeric, '/' or '.'
    s = NON_TOKEN.replace_all(&s, " ").into_owned();

    // re-pad the decimal forms; the strip above may have glued them to
    // neighboring tokens
    for fraction in FRACTIONS {
        s = pad_decimal_tokens(&s, fraction.decimal);
    }

    s.replace(" one ", " 1 ")
}

/// Wrap stand-alone occurrences of `decimal` in spaces.
///
/// An occurrence touching another digit or dot, as in "10.5", is part of a
/// larger number and must be left intact.
fn pad_decimal_tokens(line: &str, decimal: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut rest = line;
    while let Some(idx) = rest.find(decimal) {
        let end = idx + decimal.len();
        out.push_str(&rest[..idx]);
        let glued_before = out
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit() || c == '.');
        let glued_after = rest[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '.');
        if glued_before || glued_after {
            out.push_str(decimal);
        } else {
            out.push(' ');
            out.push_str(decimal);
            out.push(' ');
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// Convert a matched number token to its numeric value.
///
/// Handles the vulgar-fraction glyphs and their decimal forms via the shared
/// table, ASCII fractions like `1/2` by division, and plain numbers by float
/// parsing. Anything unparseable is 0.
pub fn parse_number(word: &str) -> f64 {
    if let Some(fraction) = FRACTIONS
        .iter()
        .find(|f| f.glyph == word || f.decimal == word)
    {
        return fraction.value;
    }
    if let Some((numerator, denominator)) = word.split_once('/') {
        if let (Ok(n), Ok(d)) = (numerator.parse::<f64>(), denominator.parse::<f64>()) {
            if d != 0.0 {
                return n / d;
            }
        }
    }
    word.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent() {
        let samples = [
            "1 ½ cups all-purpose flour, sifted",
            "2 Tablespoons butter milk (cold)",
            "  one whole chicken  ",
            "3/4 cup sugar",
            "½ tsp salt",
            "10.5 oz butter",
            "plain words with no numbers",
        ];
        for sample in samples {
            let once = sanitize_line(sample);
            let twice = sanitize_line(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_fraction_becomes_space_bounded_decimal() {
        let s = sanitize_line("½ cup milk");
        assert!(s.contains(" 0.5 "), "got {s:?}");
        assert!(!s.contains('½'));
    }

    #[test]
    fn test_larger_decimal_is_not_split() {
        // "0.5" inside "10.5" must not be padded into its own token
        let s = sanitize_line("10.5 oz butter");
        assert!(s.contains(" 10.5 "), "got {s:?}");
        assert!(!s.contains(" 0.5 "), "got {s:?}");
    }

    #[test]
    fn test_glued_decimal_is_padded() {
        let s = sanitize_line("0.5cup sugar");
        assert!(s.contains(" 0.5 "), "got {s:?}");
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let s = sanitize_line("2 Cups FLOUR, sifted!");
        assert_eq!(s, " 2 cups flour sifted ");
    }

    #[test]
    fn test_parenthetical_removed() {
        let s = sanitize_line("2 cups flour (chopped)");
        assert!(!s.contains("chopped"));
        assert!(!s.contains('('));
    }

    #[test]
    fn test_lexical_fixes() {
        assert!(sanitize_line("1 cup butter milk").contains("buttermilk"));
        assert!(sanitize_line("1 tsp bicarbonate of soda").contains("baking soda"));
        assert!(sanitize_line("1 tsp soda bicarbonate").contains("baking soda"));
    }

    #[test]
    fn test_standalone_one_becomes_digit() {
        let s = sanitize_line("one egg");
        assert!(s.contains(" 1 "));
        // embedded "one" must survive
        assert!(sanitize_line("stone ground mustard").contains("stone"));
    }

    #[test]
    fn test_spaced_slash_collapses() {
        let s = sanitize_line("1 / 2 cup sugar");
        assert!(s.contains("1/2"), "got {s:?}");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("2"), 2.0);
        assert_eq!(parse_number("0.5"), 0.5);
        assert_eq!(parse_number("½"), 0.5);
        assert_eq!(parse_number("1/2"), 0.5);
        assert_eq!(parse_number("3/4"), 0.75);
        assert_eq!(parse_number("0.66"), 2.0 / 3.0);
        assert_eq!(parse_number("garbage"), 0.0);
        assert_eq!(parse_number("1/0"), 0.0);
    }
}
