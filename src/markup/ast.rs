//! AST module for markup trees
//!
//! A parsed document is a strict tree of owned [`Node`]s under a synthetic `document`
//! root. Element nodes carry a tag name and ordered children; text nodes carry a literal
//! character run and are always leaves.

pub mod error;
pub mod node;

pub use error::MalformedMarkupError;
pub use node::{AstNode, Descendants, Node, DOCUMENT_LABEL};
