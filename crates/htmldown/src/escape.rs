//! Markdown character escaping.

/// Escape Markdown-significant characters by prefixing each with a backslash.
///
/// Single left-to-right pass; the function is total and never fails. It is
/// not idempotent: applying it twice escapes the backslashes added by the
/// first pass, so the renderer calls it exactly once per raw text leaf.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '(' | ')' | '#' | '+' | '-'
            | '.' | '!' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
