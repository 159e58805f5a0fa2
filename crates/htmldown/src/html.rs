//! HTML parsing support.
//!
//! This module adapts scraper's parsed fragments to the [`Node`] tree
//! consumed by the conversion core. It exists purely for convenience; the
//! core itself is parser agnostic.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a [`Node`] tree.
///
/// Useful when the DOM needs to be inspected or adjusted before conversion,
/// or when feeding [`MarkdownConverter::convert`](crate::MarkdownConverter::convert)
/// directly. Entities are resolved and tag names lowercased by the parser.
///
/// # Example
///
/// ```rust
/// use htmldown::{parse_html, MarkdownConverter};
///
/// let tree = parse_html("<h1>Hello <em>World</em></h1>");
/// let converter = MarkdownConverter::new();
/// let markdown = converter.convert(&tree).unwrap();
/// assert_eq!(markdown, "# Hello *World*\n\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure.
fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), &attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
