//! Stack-based tree construction
//!
//! The builder keeps an explicit stack of open elements above the synthetic root. The
//! stack owns the open elements: closing one hands it to its parent, the new top of the
//! stack, as that parent's last child. An element's parent is fixed the moment it is
//! opened and siblings are attached in the order they were opened, so the finished tree
//! is the same as if each node had been attached on creation.
//!
//! End tags are matched against nothing. `</x>` closes whatever element is open, and an
//! end tag with only the root open is ignored. Elements still open when the tokens run
//! out keep the children they already collected.

use crate::markup::ast::Node;
use crate::markup::lexer::Token;

#[derive(Debug)]
pub struct TreeBuilder {
    root: Node,
    open: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: Node::document(),
            open: Vec::new(),
        }
    }

    /// Number of open elements, not counting the root
    pub fn open_depth(&self) -> usize {
        self.open.len()
    }

    /// Label of the innermost open element, `None` when only the root is open
    pub fn current_open(&self) -> Option<&str> {
        self.open.last().map(Node::label)
    }

    /// Feed one token
    pub fn process(&mut self, token: &Token) {
        match token {
            Token::StartTag(name) => self.open_element(name),
            Token::EndTag(name) => match self.close_element() {
                Some(closed) if closed != *name => {
                    tracing::debug!(end_tag = %name, closed = %closed, "end tag closed a differently named element");
                }
                Some(_) => {}
                None => tracing::debug!(end_tag = %name, "ignoring end tag with no open element"),
            },
            Token::Text(content) => self.append_text(content),
        }
    }

    /// Open a new element as the last child of the current insertion point
    pub fn open_element(&mut self, name: &str) {
        self.open.push(Node::element(name));
    }

    /// Close the innermost open element and return its label. The root is never closed.
    pub fn close_element(&mut self) -> Option<String> {
        let closed = self.open.pop()?;
        let label = closed.label().to_owned();
        self.top().push_child(closed);
        Some(label)
    }

    /// Attach a text leaf to the current insertion point
    pub fn append_text(&mut self, content: &str) {
        self.top().push_child(Node::text(content));
    }

    /// Close every element still open and return the root
    pub fn finish(mut self) -> Node {
        if !self.open.is_empty() {
            tracing::debug!(unclosed = self.open.len(), "elements left open at end of input");
        }
        while self.close_element().is_some() {}
        self.root
    }

    fn top(&mut self) -> &mut Node {
        self.open.last_mut().unwrap_or(&mut self.root)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a tree from a token sequence. Never fails.
pub fn build(tokens: &[Token]) -> Node {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.process(token);
    }
    builder.finish()
}
