use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pipeline::LandingSummary;
use crate::report::printable_lines;
use crate::types::Role;

/// Schema version for JSON output payloads.
pub const FIGSUM_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOutput {
    pub version: String,
    pub name: Option<Value>,
    pub last_modified: Option<Value>,
    #[serde(default)]
    pub lines: Vec<LineOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOutput {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl SummaryOutput {
    /// Same lines as the Markdown report: normalized and adjacent-deduplicated.
    pub fn from_summary(summary: &LandingSummary) -> Self {
        let lines = printable_lines(&summary.lines)
            .into_iter()
            .map(|line| LineOutput {
                role: line.role,
                text: line.text,
                parents: line.item.parents.clone(),
                x: line.item.x,
                y: line.item.y,
                font_size: line.item.font_size,
            })
            .collect();

        Self {
            version: FIGSUM_OUTPUT_VERSION.to_string(),
            name: summary.name.clone(),
            last_modified: summary.last_modified.clone(),
            lines,
        }
    }
}
