use std::cmp::Ordering;

use serde_json::Value;

use crate::classifier::classify_line;
use crate::config::{ClassifierConfig, Config};
use crate::figma::{collect_text_items, FigmaExport};
use crate::types::{ClassifiedLine, TextItem};

/// Sorted, classified text of one export plus the header fields the report needs.
#[derive(Debug, Clone)]
pub struct LandingSummary {
    pub name: Option<Value>,
    pub last_modified: Option<Value>,
    pub lines: Vec<ClassifiedLine>,
}

/// Order items top to bottom, then left to right. Ties keep discovery order.
pub fn sort_reading_order(items: &mut [TextItem]) {
    items.sort_by(|a, b| {
        compare_coord(a.y, b.y).then_with(|| compare_coord(a.x, b.x))
    });
}

// JSON numbers are never NaN, so `partial_cmp` only fails on hand-built items.
fn compare_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn classify_items(items: Vec<TextItem>, config: &ClassifierConfig) -> Vec<ClassifiedLine> {
    items
        .into_iter()
        .map(|item| {
            let role = classify_line(&item, config);
            ClassifiedLine { item, role }
        })
        .collect()
}

/// Walk, sort and classify the text of an export.
pub fn summarize(export: &FigmaExport, config: &Config) -> LandingSummary {
    let mut items = collect_text_items(&export.document, &config.walker.text_node_type);
    sort_reading_order(&mut items);
    let lines = classify_items(items, &config.classifier);

    log::debug!("Classified {} lines", lines.len());

    LandingSummary {
        name: export.name.clone(),
        last_modified: export.last_modified.clone(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use serde_json::json;

    fn item(text: &str, x: f64, y: f64) -> TextItem {
        TextItem {
            text: text.to_string(),
            x,
            y,
            font_size: None,
            parents: vec![],
        }
    }

    #[test]
    fn sorts_by_y_then_x() {
        let mut items = vec![
            item("bottom", 0.0, 300.0),
            item("top-right", 500.0, 10.0),
            item("top-left", 20.0, 10.0),
            item("middle", -40.0, 120.5),
        ];

        sort_reading_order(&mut items);

        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["top-left", "top-right", "middle", "bottom"]);
        assert!(items
            .windows(2)
            .all(|w| (w[0].y, w[0].x) <= (w[1].y, w[1].x)));
    }

    #[test]
    fn equal_positions_keep_discovery_order() {
        let mut items = vec![
            item("first", 0.0, 0.0),
            item("later", 0.0, 50.0),
            item("second", 0.0, 0.0),
            item("third", 0.0, 0.0),
        ];

        sort_reading_order(&mut items);

        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third", "later"]);
    }

    #[test]
    fn summarize_orders_and_classifies_acme_landing() {
        let export = FigmaExport::from_value(json!({
            "name": "Acme Landing",
            "lastModified": "2024-01-01",
            "document": {
                "name": "Document",
                "type": "DOCUMENT",
                "children": [{
                    "name": "Home",
                    "type": "FRAME",
                    "children": [
                        { "type": "TEXT", "characters": "SIGN UP",
                          "absoluteBoundingBox": { "x": 0, "y": 90 }, "style": { "fontSize": 16 } },
                        { "type": "TEXT", "characters": "Welcome",
                          "absoluteBoundingBox": { "x": 0, "y": 10 }, "style": { "fontSize": 48 } },
                        { "type": "TEXT", "characters": "Start your journey",
                          "absoluteBoundingBox": { "x": 0, "y": 50 }, "style": { "fontSize": 28 } }
                    ]
                }]
            }
        }))
        .expect("export");

        let summary = summarize(&export, &Config::default());

        let got: Vec<(&str, Role)> = summary
            .lines
            .iter()
            .map(|l| (l.item.text.as_str(), l.role))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Welcome", Role::Heading),
                ("Start your journey", Role::Subhead),
                ("SIGN UP", Role::Cta),
            ]
        );
        assert_eq!(summary.name, Some(json!("Acme Landing")));
        assert_eq!(summary.last_modified, Some(json!("2024-01-01")));
    }
}
