use super::profile::{ContainerFallback, HeadingSpec};
use crate::core::types::FieldRecord;
use crate::dom::{char_len, DomNode, HEADING_TAGS};

/// Map headings to fields and fill each with the first substantial block
/// that follows the heading. Returns the number of fields written.
pub fn extract_headings<N: DomNode>(
    record: &mut FieldRecord,
    root: N,
    spec: &HeadingSpec,
) -> usize {
    let mut written = 0;

    for heading in root.find_all(HEADING_TAGS) {
        let label = heading.text().to_lowercase();
        let Some(rule) = spec.rules.iter().find(|rule| rule.matches(&label)) else {
            continue;
        };
        if record.is_filled(rule.field) {
            continue;
        }

        let content = following_block(heading, spec).or_else(|| {
            spec.container_fallback
                .as_ref()
                .and_then(|fallback| container_text(heading, fallback))
        });

        if let Some(content) = content {
            tracing::debug!("heading '{}' -> {}", label, rule.field);
            if record.fill(rule.field, content) {
                written += 1;
            }
        }
    }

    written
}

fn following_block<N: DomNode>(heading: N, spec: &HeadingSpec) -> Option<String> {
    let mut current = heading.next_element_sibling();
    while let Some(node) = current {
        if node.is_heading() {
            return None;
        }
        if node.is_any_tag(spec.block_tags) {
            let text = node.text();
            if char_len(&text) > spec.min_len && !mentions_any(&text, spec.blocklist) {
                return Some(text);
            }
        } else if !spec.skip_foreign_blocks {
            return None;
        }
        current = node.next_element_sibling();
    }
    None
}

/// Parent text minus the heading's own text, when enough is left over.
fn container_text<N: DomNode>(heading: N, fallback: &ContainerFallback) -> Option<String> {
    let parent = heading.parent()?;
    let parent_text = parent.text();
    let heading_text = heading.text();
    if heading_text.is_empty() || !parent_text.contains(&heading_text) {
        return None;
    }

    let remaining = parent_text.replacen(&heading_text, "", 1);
    let remaining = remaining.trim();
    if char_len(remaining) <= fallback.min_len {
        return None;
    }
    Some(remaining.chars().take(fallback.max_chars).collect())
}

fn mentions_any(text: &str, terms: &[&str]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}
