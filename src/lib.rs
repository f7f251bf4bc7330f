//! # markup-tree
//!
//! A minimal markup-to-tree converter: a [scanner](markup::lexer) turns characters into
//! start tag, end tag and text tokens, and a [tree builder](markup::parser) folds those
//! tokens into an owned tree that mirrors their nesting.
//!
//! ## Testing
//!
//! Tree assertions go through the fluent API in the [testing module](markup::testing).

pub mod markup;

pub use markup::ast::Node;
pub use markup::lexer::{tokenize, Token, TokenKind};
pub use markup::parser::{build, parse, parse_strict};
