//! Tree-walking interface used by the extractors.
//!
//! The classifier only ever talks to [`DomNode`]; [`HtmlDocument`] is the
//! implementation backed by the `scraper` (html5ever) parser.

mod html;

pub use html::{HtmlDocument, HtmlNode};

/// Elements whose text content never counts as page text.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

/// A cheap, copyable handle to one node of a parsed document.
pub trait DomNode: Copy {
    fn kind(&self) -> NodeKind;

    /// Lower-case tag name for elements, `None` otherwise.
    fn tag(&self) -> Option<&str>;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Raw character data of a text node.
    fn raw_text(&self) -> Option<&str>;

    fn parent(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    fn is_tag(&self, name: &str) -> bool {
        self.tag() == Some(name)
    }

    fn is_any_tag(&self, names: &[&str]) -> bool {
        self.tag()
            .is_some_and(|tag| names.iter().any(|name| *name == tag))
    }

    fn is_heading(&self) -> bool {
        self.is_any_tag(HEADING_TAGS)
    }

    /// Whether the `class` attribute contains `token` as a whole class name.
    fn has_class(&self, token: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == token))
    }

    /// Next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self) -> Option<Self> {
        let mut current = self.next_sibling();
        while let Some(node) = current {
            if node.is_element() {
                return Some(node);
            }
            current = node.next_sibling();
        }
        None
    }

    /// All nodes below this one in document order (pre-order, self excluded).
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        out
    }

    /// Descendant elements with one of the given tag names, in document order.
    fn find_all(&self, tags: &[&str]) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|node| node.is_any_tag(tags))
            .collect()
    }

    /// Text nodes in document order, skipping whitespace-only ones.
    fn text_nodes(&self) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|node| {
                node.kind() == NodeKind::Text
                    && node.raw_text().is_some_and(|t| !t.trim().is_empty())
            })
            .collect()
    }

    /// Visible text with every run of whitespace collapsed to one space.
    fn text(&self) -> String {
        self.joined_text(" ")
    }

    /// Visible text pieces, each whitespace-collapsed, joined by `separator`.
    fn joined_text(&self, separator: &str) -> String {
        let mut pieces = Vec::new();
        collect_text(*self, &mut pieces);
        pieces.join(separator)
    }

    /// `(element, text())` for every descendant element with one of the given
    /// tags, in document order. One bottom-up sweep: each element's text is
    /// assembled from its children's, so nesting depth never multiplies work.
    fn tagged_texts(&self, tags: &[&str]) -> Vec<(Self, String)> {
        let mut out: Vec<(Self, String)> = Vec::new();
        let mut stack = vec![TextFrame::open(*self, None, false)];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(child) = frame.children.next() else {
                let Some(done) = stack.pop() else {
                    break;
                };
                let text = if done.hidden {
                    String::new()
                } else {
                    done.pieces.join(" ")
                };
                if !text.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.pieces.push(text.clone());
                    }
                }
                if let Some(slot) = done.slot {
                    out[slot].1 = text;
                }
                continue;
            };

            if child.kind() == NodeKind::Text {
                frame.pieces.extend(text_piece(child));
                continue;
            }
            let slot = child.is_any_tag(tags).then(|| {
                out.push((child, String::new()));
                out.len() - 1
            });
            let hidden = child.is_any_tag(NON_CONTENT_TAGS);
            stack.push(TextFrame::open(child, slot, hidden));
        }

        out
    }
}

/// An element whose children are still being visited by `tagged_texts`.
struct TextFrame<N> {
    children: std::vec::IntoIter<N>,
    pieces: Vec<String>,
    /// Index into the output when the element itself was asked for.
    slot: Option<usize>,
    hidden: bool,
}

impl<N: DomNode> TextFrame<N> {
    fn open(node: N, slot: Option<usize>, hidden: bool) -> Self {
        Self {
            children: node.children().into_iter(),
            pieces: Vec::new(),
            slot,
            hidden,
        }
    }
}

fn collect_text<N: DomNode>(node: N, pieces: &mut Vec<String>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node.kind() {
            NodeKind::Text => pieces.extend(text_piece(node)),
            NodeKind::Element if node.is_any_tag(NON_CONTENT_TAGS) => {}
            _ => stack.extend(node.children().into_iter().rev()),
        }
    }
}

fn text_piece<N: DomNode>(node: N) -> Option<String> {
    node.raw_text()
        .map(collapse_whitespace)
        .filter(|piece| !piece.is_empty())
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in characters, the unit every window in this crate is measured in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
