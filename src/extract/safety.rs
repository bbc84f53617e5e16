use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use super::profile::SafetySpec;
use crate::core::types::FieldRecord;
use crate::dom::{char_len, collapse_whitespace, DomNode};

#[derive(Debug, Error)]
pub enum StructuredDataError {
    #[error("malformed structured data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("structured data is not a JSON object")]
    NotAnObject,
}

static STRUCTURED_PREFIX: OnceLock<Regex> = OnceLock::new();

fn structured_prefix() -> &'static Regex {
    STRUCTURED_PREFIX.get_or_init(|| {
        Regex::new(r#"^\{\s*"@context""#).expect("valid structured-data prefix pattern")
    })
}

/// Whether `text` opens like an inline schema.org JSON-LD block.
pub fn looks_structured(text: &str) -> bool {
    structured_prefix().is_match(text)
}

pub fn parse_structured_block(text: &str) -> Result<Map<String, Value>, StructuredDataError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(StructuredDataError::NotAnObject),
    }
}

fn warning_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Gather warning sentences (structured-data warning keys and short plain
/// mentions) and store the first few, pipe-joined, in the safety field.
pub fn extract_safety<N: DomNode>(
    record: &mut FieldRecord,
    root: N,
    spec: &SafetySpec,
) -> bool {
    let mut entries: Vec<String> = Vec::new();

    for node in root.text_nodes() {
        let raw = node.raw_text().unwrap_or_default().trim();
        let lower = raw.to_lowercase();
        if !spec.triggers.iter().any(|t| lower.contains(t)) {
            continue;
        }

        if looks_structured(raw) {
            match parse_structured_block(raw) {
                Ok(map) => {
                    for (key, label) in spec.warning_keys {
                        if let Some(value) = map.get(*key) {
                            entries.push(format!("{}: {}", label, warning_value(value)));
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!("skipping structured block: {}", e);
                }
            }
            continue;
        }

        let text = collapse_whitespace(raw);
        if spec.plain_window.contains(char_len(&text)) {
            entries.push(text);
        }
    }

    if entries.is_empty() {
        return false;
    }
    let joined = entries
        .into_iter()
        .take(spec.max_entries)
        .collect::<Vec<_>>()
        .join(" | ");
    record.fill(spec.field, joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Site;
    use crate::dom::HtmlDocument;
    use crate::extract::profile::LengthWindow;

    const SPEC: SafetySpec = SafetySpec {
        field: "safety_advice",
        triggers: &["alcohol", "pregnancy", "breastfeeding", "driving"],
        warning_keys: &[
            ("alcoholWarning", "Alcohol"),
            ("pregnancyWarning", "Pregnancy"),
            ("breastfeedingWarning", "Breastfeeding"),
            ("drivingWarning", "Driving"),
        ],
        plain_window: LengthWindow::between(20, 300),
        max_entries: 4,
    };

    fn record() -> FieldRecord {
        FieldRecord::new(Site::Apollo, &["safety_advice"], "faqs", "product_substitutes")
    }

    #[test]
    fn prefix_detection() {
        assert!(looks_structured(r#"{"@context":"https://schema.org"}"#));
        assert!(looks_structured(r#"{ "@context": "x"}"#));
        assert!(!looks_structured(r#"{"name":"x","@context":"y"}"#));
    }

    #[test]
    fn parse_errors_are_typed() {
        assert!(matches!(
            parse_structured_block(r#"{"@context": "#),
            Err(StructuredDataError::Malformed(_))
        ));
        assert!(matches!(
            parse_structured_block("[1, 2]"),
            Err(StructuredDataError::NotAnObject)
        ));
        assert!(parse_structured_block(r#"{"@context":"x"}"#).is_ok());
    }

    #[test]
    fn malformed_blocks_are_skipped_and_later_ones_count() {
        let doc = HtmlDocument::parse(
            r#"<script type="application/ld+json">{"@context": "https://schema.org", "alcoholWarning": </script>
               <script type="application/ld+json">{"@context":"https://schema.org","pregnancyWarning":"Consult your doctor","drivingWarning":true}</script>
               <p>Avoid driving if you feel drowsy after a dose.</p>
               <p>No alcohol.</p>"#,
        );
        let mut rec = record();
        assert!(extract_safety(&mut rec, doc.root(), &SPEC));
        assert_eq!(
            rec.get("safety_advice"),
            Some(
                "Pregnancy: Consult your doctor | Driving: true | \
                 Avoid driving if you feel drowsy after a dose."
            )
        );
    }

    #[test]
    fn keeps_at_most_four_entries_and_never_overwrites() {
        let doc = HtmlDocument::parse(
            "<p>Alcohol may increase drowsiness here.</p>\
             <p>Pregnancy: consult your doctor first.</p>\
             <p>Breastfeeding: probably safe to use.</p>\
             <p>Driving: do not drive if you feel dizzy.</p>\
             <p>Alcohol: limit intake during the course.</p>",
        );
        let mut rec = record();
        extract_safety(&mut rec, doc.root(), &SPEC);
        let value = rec.get("safety_advice").unwrap().to_string();
        assert_eq!(value.split(" | ").count(), 4);
        assert!(!value.contains("limit intake"));

        assert!(!extract_safety(&mut rec, doc.root(), &SPEC));
        assert_eq!(rec.get("safety_advice"), Some(value.as_str()));
    }
}
