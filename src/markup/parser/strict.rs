//! Strict tree construction
//!
//! Opt-in alternative to the lenient builder. The same [`TreeBuilder`] does the work,
//! but each token is checked first against its span and the open-element stack:
//!
//! - a tag closed by the end of the input instead of `>` is an
//!   [`UnterminatedTag`](MalformedMarkupError::UnterminatedTag)
//! - an end tag with only the root open is a
//!   [`StrayEndTag`](MalformedMarkupError::StrayEndTag)
//! - an end tag naming a different element than the innermost open one is a
//!   [`NameMismatch`](MalformedMarkupError::NameMismatch)
//!
//! Elements still open at the end of the input are closed implicitly, as in lenient mode.

use super::tree_builder::TreeBuilder;
use crate::markup::ast::{MalformedMarkupError, Node};
use crate::markup::lexer::{is_terminated_tag, tokenize_with_spans, Token};

/// Parse `source`, failing on the first malformed tag
pub fn parse_strict(source: &str) -> Result<Node, MalformedMarkupError> {
    let mut builder = TreeBuilder::new();

    for (token, span) in tokenize_with_spans(source) {
        if !is_terminated_tag(source, &token, &span) {
            return Err(MalformedMarkupError::UnterminatedTag {
                name: token.payload().to_owned(),
                offset: span.start,
            });
        }

        if let Token::EndTag(name) = &token {
            match builder.current_open() {
                None => {
                    return Err(MalformedMarkupError::StrayEndTag {
                        name: name.clone(),
                        offset: span.start,
                    })
                }
                Some(open) if open != name.as_str() => {
                    return Err(MalformedMarkupError::NameMismatch {
                        expected: open.to_owned(),
                        found: name.clone(),
                        offset: span.start,
                    })
                }
                Some(_) => {}
            }
        }

        builder.process(&token);
    }

    Ok(builder.finish())
}
