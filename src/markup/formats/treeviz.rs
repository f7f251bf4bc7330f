//! Treeviz formatter for markup trees

use crate::markup::ast::{AstNode, Node};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render the children of `root` as a box-drawing tree, one line per node
pub fn to_treeviz_str(root: &Node, max_label: usize) -> String {
    let mut result = String::new();
    let mut stack: Vec<(&Node, String, bool)> = Vec::new();
    push_children(&mut stack, root, "");

    while let Some((node, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.node_type(),
            truncate(&node.display_label(), max_label)
        ));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_children(&mut stack, node, &new_prefix);
    }

    result
}

fn push_children<'a>(stack: &mut Vec<(&'a Node, String, bool)>, node: &'a Node, prefix: &str) {
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i == count - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parser::parse;

    #[test]
    fn test_treeviz_nested_document() {
        let root = parse("<html><body><div>Hello <b>world</b></div><p></p></body></html>");
        insta::assert_snapshot!(to_treeviz_str(&root, DEFAULT_LABEL_WIDTH), @r###"
        └─ element: html
          └─ element: body
            ├─ element: div
            │ ├─ text: "Hello "
            │ └─ element: b
            │   └─ text: "world"
            └─ element: p
        "###);
    }

    #[test]
    fn test_treeviz_truncates_long_labels() {
        let root = parse("abcdefghij");
        assert_eq!(to_treeviz_str(&root, 5), "└─ text: \"abcd...\n");
    }

    #[test]
    fn test_treeviz_empty_document() {
        assert_eq!(to_treeviz_str(&parse(""), DEFAULT_LABEL_WIDTH), "");
    }
}
