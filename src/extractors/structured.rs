//! Structured-data extraction from embedded script payloads.
//!
//! Recipe pages commonly carry their ingredient list twice: once in the
//! rendered markup and once in a JSON payload (JSON-LD and friends) inside a
//! script element. The JSON copy is far cleaner, so when a decoded payload
//! contains a string array that scores like an ingredient list, it wins
//! outright and the rest of the document is never visited.

use crate::model::LineRecord;
use crate::score::score_lines;
use html_escape::decode_html_entities;
use log::debug;
use serde_json::Value;

/// Aggregate score a string array must exceed to be taken as the ingredient
/// list.
const ARRAY_SCORE_THRESHOLD: i64 = 20;

/// Minimum number of lines a winning payload must contribute.
const MIN_PAYLOAD_LINES: usize = 2;

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Try to read an ingredient line list out of one script payload.
///
/// The payload is decoded as a JSON object, or as a JSON array whose first
/// element is used. Malformed payloads are skipped silently; scanning simply
/// continues with the next script node.
pub fn lines_from_script(payload: &str) -> Option<Vec<LineRecord>> {
    let value: Value = serde_json::from_str(payload.trim()).ok()?;
    let value = match value {
        Value::Array(items) => items.into_iter().next()?,
        other => other,
    };
    let lines = walk_value(&value)?;
    if lines.len() > MIN_PAYLOAD_LINES {
        debug!("structured payload yielded {} lines", lines.len());
        Some(lines)
    } else {
        None
    }
}

/// Depth-first walk over a decoded JSON structure.
///
/// Object values recurse; array elements that are plain strings form a
/// candidate line set scored as a unit, other elements recurse. The first
/// array whose aggregate score exceeds the threshold short-circuits the
/// whole walk.
fn walk_value(value: &Value) -> Option<Vec<LineRecord>> {
    match value {
        Value::Object(map) => map.values().find_map(walk_value),
        Value::Array(items) => {
            let mut candidates = Vec::new();
            for item in items {
                match item {
                    Value::String(text) => candidates.push(decode_html_symbols(text)),
                    Value::Object(_) | Value::Array(_) => {
                        if let Some(lines) = walk_value(item) {
                            return Some(lines);
                        }
                    }
                    _ => {}
                }
            }
            let (score, records) = score_lines(&candidates);
            if score > ARRAY_SCORE_THRESHOLD {
                debug!("candidate array scored {score}, taking {} lines", records.len());
                Some(records)
            } else {
                None
            }
        }
        _ => None,
    }
}
