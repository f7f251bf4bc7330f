//! Parser module for markup sources
//!
//! This module turns token sequences into trees. [`build`] is the lenient tree builder
//! and never fails; [`parse_strict`] is the opt-in mode that rejects malformed tags.
//!
//! ## Testing
//!
//! Tree shape is asserted with the fluent API in [`crate::markup::testing`].

pub mod strict;
pub mod tree_builder;

use serde::Deserialize;

use crate::markup::ast::{MalformedMarkupError, Node};
use crate::markup::lexer::tokenize;

pub use strict::parse_strict;
pub use tree_builder::{build, TreeBuilder};

/// How tree construction treats malformed markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Absorb malformed tags, never fail
    #[default]
    Lenient,
    /// Fail on unterminated, stray or mismatched tags
    Strict,
}

/// Main parser function: scan `source` and build its tree
pub fn parse(source: &str) -> Node {
    build(&tokenize(source))
}

/// Parse `source` in the given mode. Lenient mode always returns `Ok`.
pub fn parse_with_mode(source: &str, mode: ParseMode) -> Result<Node, MalformedMarkupError> {
    match mode {
        ParseMode::Lenient => Ok(parse(source)),
        ParseMode::Strict => parse_strict(source),
    }
}
