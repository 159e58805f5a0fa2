//! # htmldown
//!
//! Convert parsed HTML node trees to Markdown.
//!
//! The core of the crate is a pure, recursive tree-to-text renderer: given a
//! [`Node`] tree, it renders children bottom-up in document order and applies
//! a per-tag [`Rule`] (or a pass-through fallback) to combine them. Tags in
//! the ignore set contribute nothing; unknown tags keep their text content.
//!
//! ## Design
//!
//! The library does not parse HTML itself. It accepts an already-parsed
//! [`Node`] tree, which keeps the conversion parser agnostic: any HTML parser
//! can adapt its output to the `Node` structure. An optional `html` feature
//! (enabled by default) bundles a scraper-based adapter for convenience.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use htmldown::{MarkdownConverter, Node};
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let converter = MarkdownConverter::new();
//! let markdown = converter.convert(&h1).unwrap();
//! assert_eq!(markdown, "# Hello World\n\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmldown::MarkdownConverter;
//!
//! let converter = MarkdownConverter::new();
//! let markdown = converter.convert_html("<h1>Hello World</h1>").unwrap();
//! assert!(markdown.contains("# Hello World"));
//! ```

mod escape;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod render;
mod rules;
mod service;
mod state;

pub use escape::escape_markdown;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::Node;
pub use rules::{Rule, RuleTable};
pub use service::{ConverterOptions, MarkdownConverter};
pub use state::{ListType, RenderState};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The root of the tree has no renderable content: a text root that
    /// trims to the empty string, or any other root without children.
    #[error("input tree has no renderable content")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
