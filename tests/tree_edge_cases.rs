//! Edge-case tables for the lenient and strict tree builders
//!
//! Each case is rendered with the markup serializer, which writes an explicit end tag for
//! every element, so the expected string spells out the exact tree shape.

use markup_tree::markup::ast::MalformedMarkupError;
use markup_tree::markup::formats::serialize_markup;
use markup_tree::markup::lexer::{tokenize, TokenKind};
use markup_tree::markup::parser::{parse, parse_strict};
use rstest::rstest;

#[rstest]
#[case::empty("", "")]
#[case::text_only("plain text", "plain text")]
#[case::lone_open_bracket("<", "<></>")]
#[case::lone_end_opener("</", "")]
#[case::empty_names("<></>", "<></>")]
#[case::stray_end_tag("</p>x", "x")]
#[case::mismatched_end_tag("<a><b></a>", "<a><b></b></a>")]
#[case::misnested_siblings("<b><c></b><d></d>", "<b><c></c><d></d></b>")]
#[case::unclosed_at_end("<a><b>text", "<a><b>text</b></a>")]
#[case::unterminated_tag("<p>x<em", "<p>x<em></em></p>")]
#[case::self_closing_not_special("<br/>x", "<br/>x</br/>")]
#[case::extra_end_tags("<a></a></a></a>y", "<a></a>y")]
#[case::text_between_siblings("<a>1</a>2<b>3</b>", "<a>1</a>2<b>3</b>")]
fn test_lenient_tree_shape(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(serialize_markup(&parse(source)), expected);
}

#[rstest]
#[case::empty("", &[])]
#[case::lone_open_bracket("<", &[TokenKind::StartTag])]
#[case::lone_end_opener("</", &[TokenKind::EndTag])]
#[case::bracket_then_slash_text("< /a>", &[TokenKind::StartTag])]
#[case::text_then_tag("a<b>", &[TokenKind::Text, TokenKind::StartTag])]
#[case::close_bracket_is_text(">>", &[TokenKind::Text])]
fn test_token_kinds(#[case] source: &str, #[case] expected: &[TokenKind]) {
    let kinds: Vec<TokenKind> = tokenize(source).iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
#[case::unterminated("<a>x<b", MalformedMarkupError::UnterminatedTag { name: "b".into(), offset: 4 })]
#[case::unterminated_end("<a></a", MalformedMarkupError::UnterminatedTag { name: "a".into(), offset: 3 })]
#[case::stray("</a>", MalformedMarkupError::StrayEndTag { name: "a".into(), offset: 0 })]
#[case::stray_after_close("<a></a></a>", MalformedMarkupError::StrayEndTag { name: "a".into(), offset: 7 })]
#[case::mismatch("<a><b></a>", MalformedMarkupError::NameMismatch { expected: "b".into(), found: "a".into(), offset: 6 })]
fn test_strict_errors(#[case] source: &str, #[case] expected: MalformedMarkupError) {
    assert_eq!(parse_strict(source), Err(expected));
}

#[test]
fn test_strict_reports_first_problem_only() {
    let err = parse_strict("</x><a").unwrap_err();
    assert_eq!(err.offset(), 0);
    assert!(matches!(err, MalformedMarkupError::StrayEndTag { .. }));
}
