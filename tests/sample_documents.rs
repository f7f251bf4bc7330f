//! Tokenizer and tree tests over the sample documents in docs/samples

use markup_tree::markup::formats::{serialize_markup, to_print_str};
use markup_tree::markup::lexer::{detokenize, tokenize, Token};
use markup_tree::markup::parser::{parse, parse_strict};
use markup_tree::markup::testing::{assert_tree, TextMatch};
use std::fs;
use std::path::PathBuf;

/// Helper function to read sample document content
fn read_sample(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs/samples")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn start(name: &str) -> Token {
    Token::StartTag(name.to_string())
}

fn end(name: &str) -> Token {
    Token::EndTag(name.to_string())
}

fn text(content: &str) -> Token {
    Token::Text(content.to_string())
}

#[test]
fn test_010_basic_tokenization() {
    let tokens = tokenize(&read_sample("010-basic.html"));
    assert_eq!(
        tokens,
        vec![
            start("html"),
            start("body"),
            start("div"),
            text("Hello "),
            start("b"),
            text("world"),
            end("b"),
            end("div"),
            end("body"),
            end("html"),
        ]
    );
}

#[test]
fn test_010_basic_print() {
    let root = parse(&read_sample("010-basic.html"));
    insta::assert_snapshot!(to_print_str(&root), @r###"
    <document>
      <html>
        <body>
          <div>
            Text: "Hello "
            <b>
              Text: "world"
            </b>
          </div>
        </body>
      </html>
    "###);
}

#[test]
fn test_020_page_tokenization() {
    let tokens = tokenize(&read_sample("020-page.html"));
    assert_eq!(
        tokens,
        vec![
            start("html"),
            text("\n"),
            start("head"),
            start("title"),
            text("Sample page"),
            end("title"),
            end("head"),
            text("\n"),
            start("body"),
            text("\n"),
            start("h1"),
            text("Heading"),
            end("h1"),
            text("\n"),
            start("p"),
            text("First "),
            start("em"),
            text("emphasised"),
            end("em"),
            text(" paragraph."),
            end("p"),
            text("\n"),
            end("body"),
            text("\n"),
            end("html"),
            text("\n"),
        ]
    );
}

#[test]
fn test_020_page_tree() {
    let root = parse(&read_sample("020-page.html"));

    assert_tree(&root)
        .child_count(2)
        .child(1, |nl| {
            nl.assert_text("\n");
        })
        .child(0, |html| {
            html.assert_element("html")
                .child_count(5)
                .child(1, |head| {
                    head.assert_element("head").child(0, |title| {
                        title.assert_element("title").text_content("Sample page");
                    });
                })
                .child(3, |body| {
                    body.assert_element("body")
                        .child_count(5)
                        .child(1, |h1| {
                            h1.assert_element("h1").text_content("Heading");
                        })
                        .child(3, |p| {
                            p.assert_element("p")
                                .child_count(3)
                                .text_content("First emphasised paragraph.")
                                .child(1, |em| {
                                    em.assert_element("em").text_content("emphasised");
                                })
                                .child(2, |t| {
                                    t.assert_text_matches(TextMatch::Contains("paragraph".into()));
                                });
                        });
                });
        });
}

#[test]
fn test_030_unclosed_list_nests_items() {
    // `</ul>` closes the innermost <li>, and the trailing newline lands in the second one
    let root = parse(&read_sample("030-unclosed-list.html"));

    assert_tree(&root).child_count(1).child(0, |ul| {
        ul.assert_element("ul").child_count(1).child(0, |li1| {
            li1.assert_element("li")
                .child_count(2)
                .child(0, |t| {
                    t.assert_text("one");
                })
                .child(1, |li2| {
                    li2.assert_element("li")
                        .child_count(3)
                        .child(0, |t| {
                            t.assert_text("two");
                        })
                        .child(1, |li3| {
                            li3.assert_element("li").text_content("three");
                        })
                        .child(2, |t| {
                            t.assert_text("\n");
                        });
                });
        });
    });
}

#[test]
fn test_040_malformed_tokenization() {
    let tokens = tokenize(&read_sample("040-malformed.html"));
    assert_eq!(
        tokens,
        vec![
            end("stray"),
            text("text"),
            start(""),
            text("empty"),
            end(""),
            start("br/"),
            text("after"),
            start("unterminated"),
        ]
    );
}

#[test]
fn test_040_malformed_tree() {
    let root = parse(&read_sample("040-malformed.html"));

    assert_tree(&root)
        .child_count(3)
        .child(0, |t| {
            t.assert_text("text");
        })
        .child(1, |empty| {
            empty.assert_element("").text_content("empty");
        })
        .child(2, |br| {
            br.assert_element("br/")
                .child_count(2)
                .child(0, |t| {
                    t.assert_text("after");
                })
                .child(1, |u| {
                    u.assert_element("unterminated").child_count(0);
                });
        });
}

#[test]
fn test_040_malformed_is_rejected_in_strict_mode() {
    assert!(parse_strict(&read_sample("040-malformed.html")).is_err());
}

#[test]
fn test_well_formed_samples_are_strict_clean() {
    for name in ["010-basic.html", "020-page.html"] {
        let source = read_sample(name);
        assert_eq!(parse_strict(&source), Ok(parse(&source)), "sample {}", name);
    }
}

#[test]
fn test_samples_detokenize_and_serialize() {
    for name in ["010-basic.html", "020-page.html", "030-unclosed-list.html"] {
        let source = read_sample(name);
        assert_eq!(detokenize(&tokenize(&source)), source, "sample {}", name);
    }
    for name in ["010-basic.html", "020-page.html"] {
        let source = read_sample(name);
        assert_eq!(serialize_markup(&parse(&source)), source, "sample {}", name);
    }
}
