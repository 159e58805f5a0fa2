//! Parsed HTML node tree.
//!
//! The conversion core consumes this structure and never mutates it. Any HTML
//! parser can adapt its output to [`Node`]; the optional `html` feature ships
//! a scraper-based adapter.

use indexmap::IndexMap;

/// One element or text unit in a parsed HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag name, attributes and ordered children.
    Element(Element),
    /// A raw text leaf.
    Text(String),
}

/// An element node. Tag and attribute names are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element node with no attributes or children.
    pub fn element(tag: &str) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Create an element node with attributes.
    pub fn element_with_attrs(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: attrs
                .iter()
                .map(|(name, value)| (name.to_lowercase(), value.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The lowercase tag name, absent for text nodes.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.tag),
            Node::Text(_) => None,
        }
    }

    /// The raw text of a text node, absent for elements.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Get an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(el) => el.attrs.get(&name.to_lowercase()).map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// Child nodes in document order. Empty for text nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Text(_) => &[],
        }
    }

    /// Append a child node. No effect on text nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(el) = self {
            el.children.push(child);
        }
    }

    /// Set an attribute, replacing any existing value for the same
    /// (case-insensitive) name. No effect on text nodes.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(el) = self {
            el.attrs.insert(name.to_lowercase(), value.to_string());
        }
    }

    /// All text content from this node and its descendants, unescaped.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }
}
