//! Rule system for HTML to Markdown conversion.

mod defaults;
mod rule;

pub use rule::{RenderFn, Rule};

use indexmap::IndexMap;

/// Mapping from lowercase tag name to rendering rule.
///
/// Built from the default rule set; caller-supplied rules merge by
/// key-overwrite, so a custom rule for a known tag fully replaces the
/// default and a custom rule for a new tag extends the table. Lookup misses
/// are not an error: the renderer falls back to passing the children's text
/// through undecorated.
pub struct RuleTable {
    rules: IndexMap<String, Rule>,
}

impl RuleTable {
    /// Create a table holding the default rules.
    pub fn new() -> Self {
        Self {
            rules: defaults::default_rules(),
        }
    }

    /// Create a table with custom rules merged over the defaults.
    pub fn with_custom_rules(custom_rules: impl IntoIterator<Item = (String, Rule)>) -> Self {
        let mut table = Self::new();
        for (tag, rule) in custom_rules {
            table.insert(&tag, rule);
        }
        table
    }

    /// Insert a rule, replacing any existing rule for the same tag.
    pub fn insert(&mut self, tag: &str, rule: Rule) {
        self.rules.insert(tag.to_lowercase(), rule);
    }

    /// Find the rule for a tag. `None` means the pass-through fallback.
    pub fn lookup(&self, tag: &str) -> Option<&Rule> {
        self.rules.get(&tag.to_lowercase())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}
