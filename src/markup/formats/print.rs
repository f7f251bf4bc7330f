//! Indented tree dump
//!
//! One line per node, indented by depth. Elements open with `<name>` and close with
//! `</name>` on their own line; text nodes print as `Text: "..."` with their content
//! verbatim. The synthetic root has no closing line.
//!
//! ```text
//! <document>
//!   <div>
//!     Text: "Hello "
//!     <b>
//!       Text: "world"
//!     </b>
//!   </div>
//! ```

use super::{walk, Visit};
use crate::markup::ast::Node;

pub const DEFAULT_INDENT: &str = "  ";

pub fn to_print_str(root: &Node) -> String {
    to_print_str_with_indent(root, DEFAULT_INDENT)
}

pub fn to_print_str_with_indent(root: &Node, indent: &str) -> String {
    let mut output = String::new();
    walk(root, |step| match step {
        Visit::Enter(node, depth) => {
            output.push_str(&indent.repeat(depth));
            if node.is_text() {
                output.push_str(&format!("Text: \"{}\"\n", node.label()));
            } else {
                output.push_str(&format!("<{}>\n", node.label()));
            }
        }
        Visit::Exit(node, depth) if depth > 0 => {
            output.push_str(&indent.repeat(depth));
            output.push_str(&format!("</{}>\n", node.label()));
        }
        Visit::Exit(..) => {}
    });
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parser::parse;

    #[test]
    fn test_print_nested_document() {
        let root = parse("<html><body><div>Hello <b>world</b></div></body></html>");
        insta::assert_snapshot!(to_print_str(&root), @r###"
        <document>
          <html>
            <body>
              <div>
                Text: "Hello "
                <b>
                  Text: "world"
                </b>
              </div>
            </body>
          </html>
        "###);
    }

    #[test]
    fn test_print_empty_document() {
        assert_eq!(to_print_str(&parse("")), "<document>\n");
    }

    #[test]
    fn test_print_custom_indent() {
        let root = parse("<p>x</p>");
        assert_eq!(
            to_print_str_with_indent(&root, "\t"),
            "<document>\n\t<p>\n\t\tText: \"x\"\n\t</p>\n"
        );
    }
}
