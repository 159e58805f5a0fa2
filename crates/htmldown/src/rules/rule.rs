//! The per-tag rendering rule type.

use crate::node::Node;
use crate::state::RenderState;

/// Type alias for rendering functions.
///
/// A rendering function receives the node, the already-rendered Markdown of
/// its children, and the render state at the node, and returns the Markdown
/// fragment for the whole subtree. It must be pure: no side effects, same
/// output for the same inputs.
pub type RenderFn = Box<dyn Fn(&Node, &str, &RenderState) -> String + Send + Sync>;

/// A rule defines how one tag is rendered to Markdown.
pub struct Rule {
    render: RenderFn,
}

impl Rule {
    /// Create a rule from a rendering function.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Node, &str, &RenderState) -> String + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Apply this rule.
    pub fn render(&self, node: &Node, children_md: &str, state: &RenderState) -> String {
        (self.render)(node, children_md, state)
    }
}
