//! Markup serialization
//!
//! Writes a tree back out as markup: `<name>` ... `</name>` around every element's
//! children and text verbatim. The synthetic root contributes no wrapper. Nothing is
//! escaped, because the scanner decodes nothing.
//!
//! Every element gets an explicit end tag, including elements that were left unclosed
//! or closed by a mismatched end tag in the source, so parsing the output gives back the
//! same element structure. Text siblings left adjacent by an ignored stray end tag come
//! back as a single text node.

use super::{walk, Visit};
use crate::markup::ast::Node;

/// Serialize a tree to markup
pub fn serialize_markup(root: &Node) -> String {
    let mut output = String::new();
    walk(root, |step| match step {
        Visit::Enter(node, _) if node.is_text() => output.push_str(node.label()),
        Visit::Enter(node, depth) if depth > 0 => {
            output.push('<');
            output.push_str(node.label());
            output.push('>');
        }
        Visit::Exit(node, depth) if depth > 0 => {
            output.push_str("</");
            output.push_str(node.label());
            output.push('>');
        }
        _ => {}
    });
    output
}
