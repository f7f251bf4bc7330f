//! Token definitions for markup sources
//!
//! The tokens are defined with the logos derive macro. Each variant carries its payload:
//! the tag name for start and end tags, the literal character run for text.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible tokens in a markup source
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Token {
    // `</` wins over `<` on the same slice
    #[regex(r"</[^>]*>?", |lex| tag_name(lex.slice(), 2), priority = 4)]
    EndTag(String),

    #[regex(r"<[^>]*>?", |lex| tag_name(lex.slice(), 1), priority = 2)]
    StartTag(String),

    // Text content (everything up to the next tag opener)
    #[regex(r"[^<]+", |lex| lex.slice().to_owned())]
    Text(String),
}

/// Strip the opener (`<` or `</`) and the optional closing `>` from a tag slice
fn tag_name(slice: &str, opener_len: usize) -> String {
    let inner = &slice[opener_len..];
    inner.strip_suffix('>').unwrap_or(inner).to_owned()
}

/// Payload-free discriminant of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    StartTag,
    EndTag,
    Text,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::StartTag(_) => TokenKind::StartTag,
            Token::EndTag(_) => TokenKind::EndTag,
            Token::Text(_) => TokenKind::Text,
        }
    }

    /// Tag name for start/end tags, literal text for text tokens. May be empty for `<>`.
    pub fn payload(&self) -> &str {
        match self {
            Token::StartTag(s) | Token::EndTag(s) | Token::Text(s) => s,
        }
    }

    /// Check if this token opens or closes an element
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::StartTag(_) | Token::EndTag(_))
    }

    /// Check if this token is text content
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::StartTag => "StartTag",
            TokenKind::EndTag => "EndTag",
            TokenKind::Text => "Text",
        };
        f.write_str(name)
    }
}

/// Simple token format: `<start:html>`, `<end:html>`, `<text:Hello >`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::StartTag(name) => write!(f, "<start:{}>", name),
            Token::EndTag(name) => write!(f, "<end:{}>", name),
            Token::Text(text) => write!(f, "<text:{}>", text),
        }
    }
}
