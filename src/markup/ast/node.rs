//! Node type definition
//!
//! Each node is exclusively owned by its parent, so the tree has no back-references and
//! no cycles. Children are stored in document order. Text nodes never gain children:
//! the only ways to attach a child are the crate-internal `push_child` used by the tree
//! builder and [`Node::element_with`], neither of which accepts a text parent.
//!
//! Nesting depth is limited only by memory, so dropping, cloning and comparing trees
//! work from a heap stack instead of recursing per level. `Serialize` and `Debug` are
//! derived and do recurse; callers serializing untrusted input check [`Node::depth`]
//! first.

use serde::Serialize;

/// Label of the synthetic root node
pub const DOCUMENT_LABEL: &str = "document";

/// Common interface for tree nodes, used by the formatters
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

#[derive(Debug, Serialize)]
pub struct Node {
    label: String,
    is_text: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// The synthetic root every tree starts from
    pub fn document() -> Self {
        Self::element(DOCUMENT_LABEL)
    }

    pub fn element(name: impl Into<String>) -> Self {
        Self {
            label: name.into(),
            is_text: false,
            children: Vec::new(),
        }
    }

    /// Element with the given children already attached
    pub fn element_with(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: name.into(),
            is_text: false,
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            label: content.into(),
            is_text: true,
            children: Vec::new(),
        }
    }

    /// Tag name for elements, literal content for text nodes
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn is_element(&self) -> bool {
        !self.is_text
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Append `child` as the last child. Callers guarantee `self` is an element.
    pub(crate) fn push_child(&mut self, child: Node) {
        debug_assert!(!self.is_text, "text nodes never have children");
        self.children.push(child);
    }

    fn shallow_copy(&self) -> Node {
        Node {
            label: self.label.clone(),
            is_text: self.is_text,
            children: Vec::with_capacity(self.children.len()),
        }
    }

    /// Pre-order traversal in document order, starting with `self`
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in this subtree, `self` included
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Height of the subtree: 0 for a node without children
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        max
    }

    /// All text leaves of this subtree concatenated in document order
    pub fn text_content(&self) -> String {
        self.iter()
            .filter(|node| node.is_text)
            .map(|node| node.label.as_str())
            .collect()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // detach descendants so each one drops with no children of its own
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = self.shallow_copy();
        // (source, copy) for every element being copied below the root
        let mut open: Vec<(&Node, Node)> = Vec::new();
        loop {
            let (source, copy) = match open.last_mut() {
                Some((source, copy)) => (*source, copy),
                None => (self, &mut root),
            };
            if let Some(next) = source.children.get(copy.children.len()) {
                open.push((next, next.shallow_copy()));
                continue;
            }
            let Some((_, finished)) = open.pop() else {
                return root;
            };
            match open.last_mut() {
                Some((_, parent)) => parent.children.push(finished),
                None => root.children.push(finished),
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        // pre-order sequences of (label, kind, child count) determine the tree
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b))
                    if a.label == b.label
                        && a.is_text == b.is_text
                        && a.children.len() == b.children.len() => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Node {}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        if self.is_text {
            "text"
        } else {
            "element"
        }
    }

    fn display_label(&self) -> String {
        if self.is_text {
            format!("{:?}", self.label)
        } else {
            self.label.clone()
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Descendants<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a subtree, see [`Node::iter`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
