//! Lexer module for markup sources
//!
//! This module contains the tokenization logic: token definitions, the logos-backed
//! scanner and the detokenizer that renders tokens back to markup.
//!
//! Scanning Model
//!
//! The scanner is a two-state machine (in text / in tag) expressed as three logos
//! patterns. Text accumulates until a `<`. A `<` opens a start tag, or an end tag when
//! it is directly followed by `/`, and everything up to the next `>` (or the end of the
//! input) is the tag name, taken verbatim.
//!
//! The scanner knows nothing about nesting. `<br/>` is a start tag named `br/`, and
//! `</x>` is an end tag whether or not an `<x>` was ever opened. Nesting is the tree
//! builder's concern.
//!
//! Leniency
//!
//! Scanning never fails. Malformed constructs produce well-defined tokens:
//!
//! - `<>` and `</>` produce tag tokens with an empty payload.
//! - A tag left open at the end of the input is implicitly closed by it, and its token
//!   carries whatever name was accumulated. The token's span is the only trace of the
//!   missing `>`, which is what strict parsing looks at.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::{detokenize, ToMarkupString};
pub use lexer_impl::{is_terminated_tag, tokenize, tokenize_with_spans, MarkupLexer};
pub use tokens::{Token, TokenKind};
