//! Fluent assertion API for tree nodes

use super::testing_matchers::TextMatch;
use crate::markup::ast::Node;

/// Create an assertion builder for a tree root
pub fn assert_tree(root: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node: root,
        context: root.label().to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node's label, whatever its kind
    pub fn label(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.node.label(), &self.context);
        self
    }

    /// Assert this node is an element named `name`
    pub fn assert_element(self, name: &str) -> Self {
        assert!(
            self.node.is_element(),
            "{}: Expected element <{}>, found {}",
            self.context,
            name,
            describe(self.node)
        );
        self.label(name)
    }

    /// Assert this node is a text leaf with exactly `content`
    pub fn assert_text(self, content: &str) -> Self {
        self.assert_text_matches(TextMatch::Exact(content.to_string()))
    }

    /// Assert this node is a text leaf whose content satisfies `matcher`
    pub fn assert_text_matches(self, matcher: TextMatch) -> Self {
        assert!(
            self.node.is_text(),
            "{}: Expected text node, found {}",
            self.context,
            describe(self.node)
        );
        assert!(
            self.node.children().is_empty(),
            "{}: Text node has {} children",
            self.context,
            self.node.children().len()
        );
        matcher.assert(self.node.label(), &self.context);
        self
    }

    /// Assert the number of direct children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds (node has {} children)",
            self.context,
            index,
            children.len()
        );

        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}/children[{}]", self.context, index),
        });
        self
    }

    /// Assert the concatenated text of the subtree
    pub fn text_content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.text_content(), &self.context);
        self
    }
}

fn describe(node: &Node) -> String {
    if node.is_text() {
        format!("text {:?}", node.label())
    } else {
        format!("element <{}>", node.label())
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| {
            if child.is_text() {
                format!("{:?}", child.label())
            } else {
                format!("<{}>", child.label())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
