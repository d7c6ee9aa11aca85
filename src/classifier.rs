use crate::config::ClassifierConfig;
use crate::types::{Role, TextItem};

/// Assign a semantic role from font size, falling back to text shape for small type.
///
/// Small text counts as a call-to-action when it is short and unchanged by
/// uppercasing. Text with no cased letters at all (digits, punctuation) passes that
/// check too.
pub fn classify_line(item: &TextItem, config: &ClassifierConfig) -> Role {
    let size = item.font_size.unwrap_or(0.0);

    if size >= config.heading_min_size {
        Role::Heading
    } else if size >= config.subhead_min_size {
        Role::Subhead
    } else if looks_like_cta(&item.text, config.cta_max_chars) {
        Role::Cta
    } else {
        Role::Body
    }
}

fn looks_like_cta(text: &str, max_chars: usize) -> bool {
    text.chars().count() <= max_chars && text.to_uppercase() == text
}
