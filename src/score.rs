//! Dictionary tagging and heuristic line scoring.

use crate::corpus;
use crate::model::{LineRecord, WordOccurrence};
use crate::sanitize::sanitize_line;

/// Locate every corpus term in `line`.
///
/// Greedy and dictionary-order-dependent: each term's first occurrence is
/// masked out of the working copy with blanks of equal width before the next
/// term is searched, so earlier (longer) entries claim their span first and
/// recorded offsets always refer to positions in the original string. The
/// sanitized line is ASCII, which keeps byte and character offsets identical.
pub fn word_positions(line: &str, corpus: &[String]) -> Vec<WordOccurrence> {
    let mut working = line.to_string();
    let mut occurrences = Vec::new();
    for term in corpus {
        if let Some(position) = working.find(term.as_str()) {
            let blanks = " ".repeat(term.chars().count());
            working.replace_range(position..position + term.len(), &blanks);
            occurrences.push(WordOccurrence {
                word: term.trim().to_string(),
                position,
            });
        }
    }
    occurrences.sort_by_key(|occ| occ.position);
    occurrences
}

/// Score a collection of lines as a unit, as used for candidate arrays found
/// in structured script data. Fewer than two lines never score.
pub fn score_lines(lines: &[String]) -> (i64, Vec<LineRecord>) {
    if lines.len() < 2 {
        return (0, Vec::new());
    }
    let mut total = 0;
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        let (score, record) = score_line(line);
        total += score;
        records.push(record);
    }
    (total, records)
}

/// Tag and score a single candidate line.
///
/// Pure and total: never fails, only scores low. Occurrence lists are
/// populated even when the score is forced to 0 by the length early-exit.
pub fn score_line(line: &str) -> (i64, LineRecord) {
    let sanitized = sanitize_line(line);
    let mut record = LineRecord {
        original: line.to_string(),
        ingredients: word_positions(&sanitized, &corpus::INGREDIENTS),
        amounts: word_positions(&sanitized, &corpus::NUMBERS),
        measures: word_positions(&sanitized, &corpus::MEASURES),
        sanitized,
        ..LineRecord::default()
    };

    // with exactly two ingredient matches, the longer word wins the line
    if record.ingredients.len() == 2
        && record.ingredients[1].word.len() > record.ingredients[0].word.len()
    {
        record.ingredients[0] = record.ingredients[1].clone();
    }

    if record.original.len() > 50 {
        return (0, record);
    }

    let mut score: i64 = 0;

    if !record.ingredients.is_empty() {
        score += 1;
    }
    // disfavor lines naming several ingredients at once
    if record.ingredients.len() > 1 {
        score -= record.ingredients.len() as i64 - 1;
    }
    if !record.amounts.is_empty() {
        score += 1;
    }
    if !record.measures.is_empty() {
        score += 1;
    }

    let first = |occs: &[WordOccurrence]| occs.first().map(|o| o.position);
    if let (Some(ing), Some(measure)) = (first(&record.ingredients), first(&record.measures)) {
        if ing > measure {
            score += 1;
        }
    }
    if let (Some(ing), Some(amount)) = (first(&record.ingredients), first(&record.amounts)) {
        if ing > amount {
            score += 1;
        }
    }
    if let (Some(measure), Some(amount)) = (first(&record.measures), first(&record.amounts)) {
        if measure > amount {
            score += 1;
        }
    }

    // prose tends to repeat punctuation; ingredient lines do not
    for punctuation in ['.', ',', '!', '?'] {
        if record.original.matches(punctuation).count() > 1 {
            score -= 1;
        }
    }

    // disfavor long lines
    if record.sanitized.len() > 30 {
        score -= record.sanitized.len() as i64 - 30;
    }
    if record.sanitized.len() > 250 {
        score = 0;
    }

    // list markers are a weak positive signal
    if let Some(first_token) = record.sanitized.split_whitespace().next() {
        if first_token == "*" || first_token == "-" {
            score += 1;
        }
    }

    // one weak signal alone is noise
    if score == 1 {
        score = 0;
    }

    (score, record)
}
