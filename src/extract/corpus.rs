use std::collections::HashSet;

use super::profile::CorpusSpec;
use crate::dom::{char_len, DomNode};

/// One candidate text block: whitespace-collapsed element text.
#[derive(Debug, Clone)]
pub struct Fragment<N> {
    pub text: String,
    /// Lower-cased `text`, the form every keyword test runs against.
    pub lower: String,
    /// Length in characters.
    pub len: usize,
    pub node: N,
}

/// Collect candidate fragments pass by pass, dropping repeats (first wins)
/// and anything mentioning a blocklisted navigation term.
pub fn build_corpus<N: DomNode>(root: N, spec: &CorpusSpec) -> Vec<Fragment<N>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fragments = Vec::new();

    for pass in spec.passes {
        for (node, text) in root.tagged_texts(pass.tags) {
            if let Some(class) = pass.class {
                if !node.has_class(class) {
                    continue;
                }
            }

            let len = char_len(&text);
            if !pass.window.contains(len) {
                continue;
            }

            let lower = text.to_lowercase();
            if spec.blocklist.iter().any(|term| lower.contains(term)) {
                continue;
            }
            if !seen.insert(text.clone()) {
                continue;
            }

            fragments.push(Fragment {
                text,
                lower,
                len,
                node,
            });
        }
    }

    fragments
}
