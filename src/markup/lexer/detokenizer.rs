//! Detokenizer for markup tokens
//!
//! This module converts a stream of tokens back into canonical markup. Every tag is
//! written with its closing `>`, so the output matches the source exactly when the
//! source had no unterminated tags.
use crate::markup::lexer::tokens::Token;

/// Trait for converting a token to its markup representation
pub trait ToMarkupString {
    fn to_markup_string(&self) -> String;
}

impl ToMarkupString for Token {
    fn to_markup_string(&self) -> String {
        match self {
            Token::StartTag(name) => format!("<{}>", name),
            Token::EndTag(name) => format!("</{}>", name),
            Token::Text(text) => text.clone(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToMarkupString::to_markup_string).collect()
}
