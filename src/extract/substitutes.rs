use super::profile::{LinkFilter, SubstituteSpec};
use crate::dom::{char_len, DomNode};

/// Names of alternative products linked from the page, first-seen order.
pub fn extract_substitutes<N: DomNode>(root: N, spec: &SubstituteSpec) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for link in root.find_all(&["a"]) {
        if names.len() >= spec.cap {
            break;
        }

        let name = link.text();
        let lower = name.to_lowercase();
        let selected = match spec.filter {
            LinkFilter::HrefContains(needle) => {
                link.attr("href").is_some_and(|href| href.contains(needle))
            }
            LinkFilter::TextKeywords(keywords) => keywords.iter().any(|k| lower.contains(k)),
        };
        if !selected || name.is_empty() || char_len(&name) >= spec.max_len {
            continue;
        }
        if spec.blocklist.iter().any(|term| lower.contains(term)) {
            continue;
        }
        if names.contains(&name) {
            continue;
        }
        names.push(name);
    }

    names
}
