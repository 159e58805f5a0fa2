//! MarkdownConverter - the main entry point for tree to Markdown conversion.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::Node;
use crate::render::Renderer;
use crate::rules::{Rule, RuleTable};
use crate::state::RenderState;
use crate::{ConvertError, Result};

/// Tags whose subtrees contribute no output unless the caller supplies a
/// replacement set.
static DEFAULT_IGNORED_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["script", "style", "head", "title", "meta", "link"]
        .into_iter()
        .collect()
});

/// Configuration for [`MarkdownConverter`].
#[derive(Default)]
pub struct ConverterOptions {
    /// Per-tag rules merged over the defaults by key-overwrite: a rule for a
    /// known tag replaces the default, a rule for a new tag extends the set.
    pub custom_rules: IndexMap<String, Rule>,
    /// Tags whose entire subtree is skipped. When supplied this replaces the
    /// default set (script, style, head, title, meta, link).
    pub ignore_tags: Option<HashSet<String>>,
}

/// The conversion facade: holds the rule table and ignore set, both fixed at
/// construction, and exposes [`convert`](MarkdownConverter::convert).
///
/// Conversion is a pure function of the tree and this configuration, so a
/// single converter can be shared across threads and reused for any number
/// of independent trees.
pub struct MarkdownConverter {
    rules: RuleTable,
    ignored_tags: HashSet<String>,
}

impl MarkdownConverter {
    /// Create a converter with the default rules and ignore set.
    pub fn new() -> Self {
        Self::with_options(ConverterOptions::default())
    }

    /// Create a converter with custom options.
    pub fn with_options(options: ConverterOptions) -> Self {
        let ignored_tags = match options.ignore_tags {
            Some(tags) => tags.into_iter().map(|t| t.to_lowercase()).collect(),
            None => DEFAULT_IGNORED_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        };
        Self {
            rules: RuleTable::with_custom_rules(options.custom_rules),
            ignored_tags,
        }
    }

    /// Convert a parsed node tree to Markdown.
    ///
    /// Fails with [`ConvertError::EmptyInput`] when the root has no
    /// renderable content: a text root that trims to the empty string, or
    /// any other root without children. The check runs before rendering; a
    /// tree that merely renders to an empty string (for example a single
    /// ignored tag) is not an error.
    pub fn convert(&self, root: &Node) -> Result<String> {
        if !has_renderable_content(root) {
            return Err(ConvertError::EmptyInput);
        }

        tracing::debug!("starting tree to Markdown conversion");
        let markdown = Renderer::new(&self.rules, &self.ignored_tags)
            .render(root, RenderState::default());
        tracing::debug!(bytes = markdown.len(), "conversion finished");
        Ok(markdown)
    }

    /// Parse an HTML string and convert it to Markdown.
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let root = crate::html::parse_html(html);
        self.convert(&root)
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn has_renderable_content(root: &Node) -> bool {
    match root.raw_text() {
        Some(text) => !text.trim().is_empty(),
        None => !root.children().is_empty(),
    }
}
