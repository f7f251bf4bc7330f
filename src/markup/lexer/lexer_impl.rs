//! Implementation of the markup lexer
//!
//! This module provides the scanning entry points. The actual tokenization is handled
//! by logos; this layer collects tokens, keeps their spans and logs what it saw.

use crate::markup::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Iterator over the tokens of a markup source
pub struct MarkupLexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> MarkupLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Byte range of the token most recently returned by `next`
    pub fn span(&self) -> Range<usize> {
        self.inner.span()
    }
}

impl Iterator for MarkupLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match self.inner.next()? {
                Ok(token) => return Some(token),
                // Every character starts either a tag or a text run, so this is unreachable
                // in practice; skip rather than abort the scan.
                Err(()) => {
                    tracing::warn!(span = ?self.inner.span(), "skipping unrecognised input");
                }
            }
        }
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = MarkupLexer::new(source).collect();
    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "scanned source");
    tokens
}

/// Convenience function to tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = MarkupLexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        tracing::trace!(%token, span = ?lexer.span(), "token");
        tokens.push((token, lexer.span()));
    }

    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "scanned source");
    tokens
}

/// Whether the tag token at `span` was closed by `>` rather than by the end of the input.
/// Text tokens always count as terminated.
pub fn is_terminated_tag(source: &str, token: &Token, span: &Range<usize>) -> bool {
    !token.is_tag() || source[span.clone()].ends_with('>')
}
