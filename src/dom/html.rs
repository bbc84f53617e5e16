use super::{DomNode, NodeKind};
use scraper::Html;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum NodeValue {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Other,
}

#[derive(Debug, Clone)]
struct NodeData {
    value: NodeValue,
    parent: Option<usize>,
    next_sibling: Option<usize>,
    children: Vec<usize>,
}

/// An immutable, owned snapshot of an html5ever parse.
///
/// The scraper tree is flattened into an index-addressed arena so the
/// document is `Send + Sync` and node handles are plain `(doc, index)` pairs.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    nodes: Vec<NodeData>,
    root: usize,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);

        let mut index = HashMap::new();
        for (i, node) in parsed.tree.nodes().enumerate() {
            index.insert(node.id(), i);
        }

        let mut nodes = Vec::with_capacity(index.len());
        for node in parsed.tree.nodes() {
            let value = match node.value() {
                scraper::Node::Element(el) => NodeValue::Element {
                    name: el.name().to_ascii_lowercase(),
                    attrs: el
                        .attrs()
                        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                        .collect(),
                },
                scraper::Node::Text(text) => NodeValue::Text(text.text.to_string()),
                _ => NodeValue::Other,
            };
            nodes.push(NodeData {
                value,
                parent: node.parent().and_then(|p| index.get(&p.id()).copied()),
                next_sibling: node.next_sibling().and_then(|s| index.get(&s.id()).copied()),
                children: node
                    .children()
                    .filter_map(|c| index.get(&c.id()).copied())
                    .collect(),
            });
        }

        let root = index.get(&parsed.tree.root().id()).copied().unwrap_or(0);
        Self { nodes, root }
    }

    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            doc: self,
            id: self.root,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: usize) -> HtmlNode<'_> {
        HtmlNode { doc: self, id }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    doc: &'a HtmlDocument,
    id: usize,
}

impl<'a> HtmlNode<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id]
    }
}

impl<'a> DomNode for HtmlNode<'a> {
    fn kind(&self) -> NodeKind {
        match self.data().value {
            NodeValue::Element { .. } => NodeKind::Element,
            NodeValue::Text(_) => NodeKind::Text,
            NodeValue::Other => NodeKind::Other,
        }
    }

    fn tag(&self) -> Option<&str> {
        match &self.data().value {
            NodeValue::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        match &self.data().value {
            NodeValue::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn raw_text(&self) -> Option<&str> {
        match &self.data().value {
            NodeValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.doc.node(id))
    }

    fn next_sibling(&self) -> Option<Self> {
        self.data().next_sibling.map(|id| self.doc.node(id))
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&id| self.doc.node(id))
            .collect()
    }
}
