//! Testing utilities for tree assertions
//!
//! Tests should assert the whole shape of a tree, not generalities like node counts. The
//! fluent API here mirrors the tree, so the assertion reads like the structure it
//! expects:
//!
//! ```rust,ignore
//! use markup_tree::markup::parser::parse;
//! use markup_tree::markup::testing::assert_tree;
//!
//! let root = parse("<div>Hello <b>world</b></div>");
//! assert_tree(&root).child_count(1).child(0, |div| {
//!     div.assert_element("div")
//!         .child_count(2)
//!         .child(0, |t| { t.assert_text("Hello "); })
//!         .child(1, |b| { b.assert_element("b"); });
//! });
//! ```
//!
//! Failures carry the path from the root:
//!
//! ```text
//! document/children[0]/children[1]: Expected element <b>, found text "world"
//! ```
//!
//! Count mismatches list what was actually there:
//!
//! ```text
//! document/children[0]: Expected 3 children, found 2: [<b>, "world"]
//! ```

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{assert_tree, NodeAssertion};
pub use testing_matchers::TextMatch;
