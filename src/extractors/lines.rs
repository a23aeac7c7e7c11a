//! Candidate-line extraction from the document tree.
//!
//! Ingredient lists are typically flat sibling groups: list items, table
//! rows, a run of short divs. The walk scores every node's direct children
//! as ingredient-line candidates and accepts the group when the combined
//! score clears the floor and the group has a plausible size. The bounds
//! reject both trivial text runs and oversized unrelated blocks such as
//! whole-page navigation.

use crate::extractors::structured;
use crate::model::LineRecord;
use crate::score::score_line;
use log::debug;
use scraper::node::Node;
use scraper::Html;

type NodeRef<'a> = ego_tree::NodeRef<'a, Node>;

/// Raw score above which a sibling group is considered an ingredient container.
const CONTAINER_SCORE_FLOOR: i64 = 2;
/// Exclusive bounds on the number of lines in an ingredient container.
const CONTAINER_MIN_LINES: usize = 2;
const CONTAINER_MAX_LINES: usize = 25;

/// What one node hands back to its parent.
struct NodeOutcome {
    /// The node's collapsed text, considered as a candidate line upward.
    text: String,
    /// Lines accepted by containers anywhere in this subtree, document order.
    accepted: Vec<LineRecord>,
    /// Set when a script payload produced a structured-data hit; ends the
    /// walk outright.
    structured: Option<Vec<LineRecord>>,
}

/// Extract the document's candidate ingredient lines.
///
/// A structured-data hit in a script node bypasses everything found in the
/// markup; otherwise the container-accepted lines are returned in document
/// order. A page with no ingredient-like structure yields an empty list.
pub fn ingredient_lines(document: &Html) -> Vec<LineRecord> {
    let outcome = walk(document.tree.root());
    match outcome.structured {
        Some(lines) => lines,
        None => outcome.accepted,
    }
}

/// Single bottom-up pass, each node visited exactly once.
///
/// Children are scored first; their scores and collapsed texts accumulate in
/// the parent, which then decides whether the sibling group is an ingredient
/// container. Every per-node result is owned and merged by the caller.
fn walk(node: NodeRef<'_>) -> NodeOutcome {
    let is_script = matches!(node.value(), Node::Element(el) if el.name() == "script");

    let mut accepted = Vec::new();
    let mut children_records: Vec<LineRecord> = Vec::new();
    let mut score: i64 = 0;

    for child in node.children() {
        if is_script {
            if let Node::Text(text) = child.value() {
                if let Some(lines) = structured::lines_from_script(&text.text) {
                    return NodeOutcome {
                        text: String::new(),
                        accepted: Vec::new(),
                        structured: Some(lines),
                    };
                }
            }
        }

        let child_outcome = walk(child);
        if child_outcome.structured.is_some() {
            return child_outcome;
        }
        accepted.extend(child_outcome.accepted);
        if !child_outcome.text.is_empty() {
            let (line_score, record) = score_line(&child_outcome.text);
            score += line_score;
            children_records.push(record);
        }
    }

    if score > CONTAINER_SCORE_FLOOR
        && children_records.len() > CONTAINER_MIN_LINES
        && children_records.len() < CONTAINER_MAX_LINES
    {
        for record in &children_records {
            debug!("ingredient container line [{}]", record.original);
        }
        accepted.extend(children_records.iter().cloned());
    }

    let text = if !children_records.is_empty() {
        children_records
            .iter()
            .map(|r| r.original.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    } else if let Node::Text(text) = node.value() {
        text.trim().to_string()
    } else {
        String::new()
    };

    NodeOutcome {
        text,
        accepted,
        structured: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_of_ingredient_lines_is_accepted() {
        let html = Html::parse_document(
            r#"<html><body><ul>
                <li>1 cup flour</li>
                <li>2 tablespoons sugar</li>
                <li>3 eggs</li>
            </ul></body></html>"#,
        );
        let lines = ingredient_lines(&html);
        let originals: Vec<&str> = lines.iter().map(|l| l.original.as_str()).collect();
        assert_eq!(
            originals,
            vec!["1 cup flour", "2 tablespoons sugar", "3 eggs"]
        );
    }

    #[test]
    fn test_two_line_group_is_too_small() {
        let html = Html::parse_document(
            r#"<html><body><ul>
                <li>1 cup flour</li>
                <li>2 tablespoons sugar</li>
            </ul></body></html>"#,
        );
        assert!(ingredient_lines(&html).is_empty());
    }

    #[test]
    fn test_navigation_block_scores_too_low() {
        let html = Html::parse_document(
            r#"<html><body><nav>
                <a>Home</a>
                <a>About</a>
                <a>Recipes</a>
                <a>Contact</a>
            </nav></body></html>"#,
        );
        assert!(ingredient_lines(&html).is_empty());
    }

    #[test]
    fn test_script_payload_bypasses_markup() {
        let html = Html::parse_document(
            r#"<html><head><script type="application/ld+json">
                {"recipeIngredient": ["2 cups flour", "1 cup sugar", "2 tablespoons butter", "3 eggs"]}
            </script></head><body><ul>
                <li>1 cup noise</li>
                <li>2 cups clutter</li>
                <li>3 cans static</li>
            </ul></body></html>"#,
        );
        let lines = ingredient_lines(&html);
        let originals: Vec<&str> = lines.iter().map(|l| l.original.as_str()).collect();
        assert_eq!(
            originals,
            vec!["2 cups flour", "1 cup sugar", "2 tablespoons butter", "3 eggs"]
        );
    }

    #[test]
    fn test_malformed_script_payload_falls_through_to_markup() {
        let html = Html::parse_document(
            r#"<html><head><script>window.x = {;</script></head><body><ul>
                <li>1 cup flour</li>
                <li>2 tablespoons sugar</li>
                <li>3 eggs</li>
            </ul></body></html>"#,
        );
        assert_eq!(ingredient_lines(&html).len(), 3);
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let html = Html::parse_document("<html><body><p>hello</p></body></html>");
        assert!(ingredient_lines(&html).is_empty());
    }
}
