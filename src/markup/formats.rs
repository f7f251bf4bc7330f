//! Output formats for markup trees
//!
//! Every formatter is a read-only walk over a finished tree. The walks use an explicit
//! stack like the tree builder does, so arbitrarily deep trees (a long run of unclosed
//! tags, say) format without recursion.

pub mod print;
pub mod tag;
pub mod treeviz;

use crate::markup::ast::Node;

pub use print::{to_print_str, to_print_str_with_indent};
pub use tag::serialize_markup;
pub use treeviz::to_treeviz_str;

/// One step of a depth-first walk
pub(crate) enum Visit<'a> {
    Enter(&'a Node, usize),
    Exit(&'a Node, usize),
}

/// Depth-first walk emitting an `Enter` for every node and an `Exit` for every element,
/// each tagged with the node's depth (the root is depth 0).
pub(crate) fn walk<'a>(root: &'a Node, mut visit: impl FnMut(Visit<'a>)) {
    let mut stack = vec![Visit::Enter(root, 0)];
    while let Some(step) = stack.pop() {
        if let Visit::Enter(node, depth) = step {
            if node.is_element() {
                stack.push(Visit::Exit(node, depth));
                stack.extend(
                    node.children()
                        .iter()
                        .rev()
                        .map(|child| Visit::Enter(child, depth + 1)),
                );
            }
        }
        visit(step);
    }
}
