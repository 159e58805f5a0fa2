//! Render state threaded through recursive rendering.

/// The kind of list currently being rendered, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// Not inside a list.
    #[default]
    None,
    /// Inside a `<ul>`.
    Unordered,
    /// Inside an `<ol>`.
    Ordered,
}

/// Ambient list context for one recursive render call.
///
/// Passed by value at every call site; sibling branches each get their own
/// copy, so state set along one descent never leaks into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Depth of ordered/unordered list nesting. Zero outside any list; a
    /// list item sees the level of its enclosing list (one at the top).
    pub list_level: usize,
    /// Type of the innermost enclosing list.
    pub list_type: ListType,
    /// Running ordinal of a list item among its `li` siblings, starting at 1
    /// per list. Meaningful only under [`ListType::Ordered`].
    pub item_index: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            list_level: 0,
            list_type: ListType::None,
            item_index: 1,
        }
    }
}

impl RenderState {
    /// State for the children of a `<ul>`/`<ol>`: one level deeper, list
    /// type set, item ordinal reset.
    pub fn enter_list(self, list_type: ListType) -> Self {
        Self {
            list_level: self.list_level + 1,
            list_type,
            item_index: 1,
        }
    }

    /// State for one `li` child, carrying its running sibling ordinal.
    pub fn with_item_index(self, item_index: usize) -> Self {
        Self { item_index, ..self }
    }

    /// Indentation for a list item at this state's nesting depth: two spaces
    /// per level beyond the first, so top-level items sit flush left.
    pub fn indent(&self) -> String {
        "  ".repeat(self.list_level.saturating_sub(1))
    }
}
