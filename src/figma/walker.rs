//! Recursive walk over an untyped Figma document tree, collecting text nodes.

use serde_json::{Map, Value};

use crate::types::TextItem;

/// One link of the ancestor chain, borrowed from the document.
///
/// Frames live on the call stack of the walk; a child's chain points at its
/// parent's frame.
#[derive(Debug)]
struct Ancestry<'a> {
    node: &'a Map<String, Value>,
    parent: Option<&'a Ancestry<'a>>,
}

impl<'a> Ancestry<'a> {
    /// Non-empty ancestor names, root first.
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::iter::successors(Some(self), |frame| frame.parent)
            .filter_map(|frame| frame.node.get("name").and_then(Value::as_str))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        names.reverse();
        names
    }
}

/// Collect every text item reachable from `root`, in pre-order discovery order.
///
/// A node counts as text-bearing when its `type` equals `text_node_type` and its
/// `characters` are non-empty after trimming. Every object or array value is
/// descended into, text node or not; scalars end the branch.
pub fn collect_text_items(root: &Value, text_node_type: &str) -> Vec<TextItem> {
    let mut acc = Vec::new();
    walk(root, None, text_node_type, &mut acc);
    log::debug!("Collected {} text items from document tree", acc.len());
    acc
}

fn walk<'a>(
    node: &'a Value,
    ancestry: Option<&'a Ancestry<'a>>,
    text_node_type: &str,
    acc: &mut Vec<TextItem>,
) {
    match node {
        Value::Object(map) => {
            if let Some(item) = text_item(map, ancestry, text_node_type) {
                acc.push(item);
            }

            let frame = Ancestry {
                node: map,
                parent: ancestry,
            };
            for value in map.values() {
                if value.is_object() || value.is_array() {
                    walk(value, Some(&frame), text_node_type, acc);
                }
            }
        }
        Value::Array(items) => {
            for child in items {
                walk(child, ancestry, text_node_type, acc);
            }
        }
        _ => {}
    }
}

fn text_item(
    map: &Map<String, Value>,
    ancestry: Option<&Ancestry<'_>>,
    text_node_type: &str,
) -> Option<TextItem> {
    if map.get("type").and_then(Value::as_str) != Some(text_node_type) {
        return None;
    }

    let text = map
        .get("characters")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())?;

    let bounding_box = map.get("absoluteBoundingBox").and_then(Value::as_object);
    let coord = |key: &str| {
        bounding_box
            .and_then(|b| b.get(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };
    let font_size = map
        .get("style")
        .and_then(Value::as_object)
        .and_then(|style| style.get("fontSize"))
        .and_then(Value::as_f64);

    Some(TextItem {
        text: text.to_string(),
        x: coord("x"),
        y: coord("y"),
        font_size,
        parents: ancestry.map(Ancestry::names).unwrap_or_default(),
    })
}
