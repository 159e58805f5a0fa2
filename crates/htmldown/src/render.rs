//! The recursive node-to-Markdown renderer.

use std::collections::HashSet;

use crate::escape::escape_markdown;
use crate::node::Node;
use crate::rules::RuleTable;
use crate::state::{ListType, RenderState};

/// Borrowing view over a converter's configuration for one conversion call.
pub(crate) struct Renderer<'a> {
    rules: &'a RuleTable,
    ignored_tags: &'a HashSet<String>,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(rules: &'a RuleTable, ignored_tags: &'a HashSet<String>) -> Self {
        Self {
            rules,
            ignored_tags,
        }
    }

    /// Render one node and its subtree, bottom-up.
    ///
    /// Text leaves are escaped exactly once; ignored tags contribute nothing
    /// and their children are never visited; every other element renders its
    /// children in document order and combines them via its rule, or passes
    /// them through unchanged when no rule is registered.
    pub(crate) fn render(&self, node: &Node, state: RenderState) -> String {
        let Some(tag) = node.tag_name() else {
            let text = normalize_text(node.raw_text().unwrap_or(""));
            return escape_markdown(&text);
        };

        if self.ignored_tags.contains(tag) {
            tracing::debug!(tag, "skipping ignored tag");
            return String::new();
        }

        let is_list = matches!(tag, "ul" | "ol");
        let child_state = match tag {
            "ul" => state.enter_list(ListType::Unordered),
            "ol" => state.enter_list(ListType::Ordered),
            _ => state,
        };

        let mut children_md = String::new();
        let mut item_index = 1;
        for child in node.children() {
            let is_item = is_list && child.tag_name() == Some("li");
            let state_for_child = if is_item {
                child_state.with_item_index(item_index)
            } else {
                child_state
            };
            children_md.push_str(&self.render(child, state_for_child));
            if is_item {
                item_index += 1;
            }
        }

        match self.rules.lookup(tag) {
            Some(rule) => rule.render(node, &children_md, &state),
            None => {
                tracing::debug!(tag, "no rule registered, passing children through");
                children_md
            }
        }
    }
}

/// Whitespace policy for text leaves: a whitespace-only node renders to the
/// empty string; otherwise internal whitespace is preserved verbatim and
/// each boundary run of whitespace collapses to a single space, keeping
/// inline spacing around elements like `<strong>` and `<a>` intact.
fn normalize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut text = String::with_capacity(trimmed.len() + 2);
    if raw.starts_with(char::is_whitespace) {
        text.push(' ');
    }
    text.push_str(trimmed);
    if raw.ends_with(char::is_whitespace) {
        text.push(' ');
    }
    text
}
