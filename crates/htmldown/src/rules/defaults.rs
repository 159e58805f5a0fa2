//! Default rendering rules.

use indexmap::IndexMap;

use super::Rule;
use crate::escape::escape_markdown;
use crate::state::ListType;

/// Build the default rule table contents.
pub(super) fn default_rules() -> IndexMap<String, Rule> {
    let mut rules = IndexMap::new();

    for level in 1..=6usize {
        rules.insert(
            format!("h{level}"),
            Rule::new(move |_, children_md, _| {
                format_block(&format!("{} {}", "#".repeat(level), children_md.trim()))
            }),
        );
    }

    rules.insert(
        "p".to_string(),
        Rule::new(|_, children_md, _| format_block(children_md)),
    );

    rules.insert(
        "br".to_string(),
        Rule::new(|_, _, _| "\n".to_string()),
    );

    rules.insert(
        "hr".to_string(),
        Rule::new(|_, _, _| format_block("---")),
    );

    for tag in ["em", "i"] {
        rules.insert(
            tag.to_string(),
            // Wrap without trimming: internal whitespace belongs to the text.
            Rule::new(|_, children_md, _| wrap_inline(children_md, "*")),
        );
    }

    for tag in ["strong", "b"] {
        rules.insert(
            tag.to_string(),
            Rule::new(|_, children_md, _| wrap_inline(children_md, "**")),
        );
    }

    rules.insert("code".to_string(), code_rule());
    rules.insert("pre".to_string(), pre_rule());
    rules.insert("a".to_string(), link_rule());
    rules.insert("img".to_string(), image_rule());
    rules.insert("blockquote".to_string(), blockquote_rule());

    for tag in ["ul", "ol"] {
        rules.insert(tag.to_string(), list_rule());
    }
    rules.insert("li".to_string(), list_item_rule());

    rules
}

/// Trimmed content followed by a blank line; empty content renders nothing.
fn format_block(content: &str) -> String {
    let content = content.trim();
    if content.is_empty() {
        return String::new();
    }
    format!("{content}\n\n")
}

fn wrap_inline(children_md: &str, delimiter: &str) -> String {
    if children_md.trim().is_empty() {
        return String::new();
    }
    format!("{delimiter}{children_md}{delimiter}")
}

/// Inline code span over the node's raw text. Code content is taken from the
/// tree rather than the rendered children so it is never backslash-escaped.
fn code_rule() -> Rule {
    Rule::new(|node, _, _| {
        let content = node.text_content();
        if content.is_empty() {
            return String::new();
        }
        format!("`{content}`")
    })
}

/// Fenced code block over the node's raw text.
fn pre_rule() -> Rule {
    Rule::new(|node, _, _| {
        let content = node.text_content();
        format_block(&format!("```\n{}\n```", content.trim()))
    })
}

/// Inline link. The link text was already escaped at the text leaves, so it
/// is used as-is here.
fn link_rule() -> Rule {
    Rule::new(|node, children_md, _| {
        let href = node.attr("href").unwrap_or("");
        format!("[{}]({})", children_md.trim(), href)
    })
}

/// Image, emitted even without a source so the alt text is never dropped.
fn image_rule() -> Rule {
    Rule::new(|node, _, _| {
        let alt = escape_markdown(node.attr("alt").unwrap_or(""));
        let src = node.attr("src").unwrap_or("");
        format!("![{alt}]({src})")
    })
}

fn blockquote_rule() -> Rule {
    Rule::new(|_, children_md, _| {
        let quoted: Vec<String> = children_md
            .trim()
            .lines()
            .map(|line| format!("> {line}"))
            .collect();
        format_block(&quoted.join("\n"))
    })
}

/// Shared rule for `ul` and `ol`. The items carry their own indentation and
/// markers; a top-level list closes with a blank line while a nested list is
/// spliced into its parent item on a bare newline.
fn list_rule() -> Rule {
    Rule::new(|_, children_md, state| {
        if children_md.trim().is_empty() {
            return String::new();
        }
        if state.list_level == 0 {
            format!("{children_md}\n")
        } else {
            format!("\n{children_md}")
        }
    })
}

fn list_item_rule() -> Rule {
    Rule::new(|_, children_md, state| {
        let marker = match state.list_type {
            ListType::Ordered => format!("{}. ", state.item_index),
            _ => "- ".to_string(),
        };
        format!("{}{}{}\n", state.indent(), marker, children_md.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::state::RenderState;

    fn apply(rule: &Rule, node: &Node, children_md: &str) -> String {
        rule.render(node, children_md, &RenderState::default())
    }

    #[test]
    fn heading_prefixes_level_hashes() {
        let rules = default_rules();
        let node = Node::element("h3");
        assert_eq!(apply(&rules["h3"], &node, "Title"), "### Title\n\n");
    }

    #[test]
    fn empty_heading_renders_nothing() {
        let rules = default_rules();
        let node = Node::element("h1");
        assert_eq!(apply(&rules["h1"], &node, "  "), "");
    }

    #[test]
    fn line_break_renders_bare_newline() {
        let rules = default_rules();
        let node = Node::element("br");
        assert_eq!(apply(&rules["br"], &node, ""), "\n");
    }

    #[test]
    fn horizontal_rule_renders_block() {
        let rules = default_rules();
        let node = Node::element("hr");
        assert_eq!(apply(&rules["hr"], &node, ""), "---\n\n");
    }

    #[test]
    fn strong_and_emphasis_wrap_without_trimming() {
        let rules = default_rules();
        let node = Node::element("strong");
        assert_eq!(apply(&rules["strong"], &node, "bold text"), "**bold text**");
        assert_eq!(apply(&rules["em"], &node, "soft"), "*soft*");
        assert_eq!(apply(&rules["em"], &node, "   "), "");
    }

    #[test]
    fn code_span_uses_raw_text() {
        let rules = default_rules();
        let mut code = Node::element("code");
        code.add_child(Node::text("a * b"));
        // Raw text, not the escaped children rendering.
        assert_eq!(apply(&rules["code"], &code, "a \\* b"), "`a * b`");
    }

    #[test]
    fn pre_wraps_in_fences() {
        let rules = default_rules();
        let mut pre = Node::element("pre");
        pre.add_child(Node::text("fn main() {}\n"));
        assert_eq!(apply(&rules["pre"], &pre, ""), "```\nfn main() {}\n```\n\n");
    }

    #[test]
    fn link_uses_href_or_empty() {
        let rules = default_rules();
        let a = Node::element_with_attrs("a", &[("href", "https://example.com")]);
        assert_eq!(
            apply(&rules["a"], &a, "text"),
            "[text](https://example.com)"
        );
        let bare = Node::element("a");
        assert_eq!(apply(&rules["a"], &bare, "text"), "[text]()");
    }

    #[test]
    fn image_escapes_alt_text() {
        let rules = default_rules();
        let img = Node::element_with_attrs("img", &[("src", "x.png"), ("alt", "a*b")]);
        assert_eq!(apply(&rules["img"], &img, ""), "![a\\*b](x.png)");
    }

    #[test]
    fn image_without_src_keeps_alt_text() {
        let rules = default_rules();
        let img = Node::element_with_attrs("img", &[("alt", "lonely")]);
        assert_eq!(apply(&rules["img"], &img, ""), "![lonely]()");
    }

    #[test]
    fn blockquote_prefixes_each_line() {
        let rules = default_rules();
        let node = Node::element("blockquote");
        assert_eq!(
            apply(&rules["blockquote"], &node, "one\ntwo"),
            "> one\n> two\n\n"
        );
    }

    #[test]
    fn list_item_marker_follows_list_type() {
        let rules = default_rules();
        let li = Node::element("li");
        let unordered = RenderState::default().enter_list(ListType::Unordered);
        assert_eq!(rules["li"].render(&li, "x", &unordered), "- x\n");

        let ordered = RenderState::default()
            .enter_list(ListType::Ordered)
            .with_item_index(4);
        assert_eq!(rules["li"].render(&li, "x", &ordered), "4. x\n");
    }

    #[test]
    fn nested_list_item_is_indented() {
        let rules = default_rules();
        let li = Node::element("li");
        let nested = RenderState::default()
            .enter_list(ListType::Unordered)
            .enter_list(ListType::Unordered);
        assert_eq!(rules["li"].render(&li, "y", &nested), "  - y\n");
    }
}
