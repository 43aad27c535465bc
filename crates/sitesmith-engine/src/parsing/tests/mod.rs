//! Integration tests for the parsing module.
//!
//! Fixture pairs (`<name>.md` and the expected `<name>.html`) live in
//! `fixtures/`. Every rendered tree is also run through the structural
//! invariants.


use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ParseError, markdown_to_html, markdown_to_html_node};

fn render(md: &str) -> String {
    let node = markdown_to_html_node(md).unwrap();
    invariants::check(&node);
    node.to_html()
}

// Fixture-based tests

#[test]
fn fixture_blog_post() {
    assert_fixture("blog_post");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(render(&md), expected.trim_end());
}

// Document scenarios

#[test]
fn bolded_paragraph() {
    assert_snapshot!(
        render("This is **bolded** paragraph"),
        @"<div><p>This is <b>bolded</b> paragraph</p></div>"
    );
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_snapshot!(
        render(md),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn lists() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items

";
    assert_snapshot!(
        render(md),
        @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn headings() {
    let md = "
# this is an h1

this is paragraph text

## this is an h2
";
    assert_snapshot!(
        render(md),
        @"<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    );
}

#[test]
fn blockquote() {
    let md = "
> This is a
> blockquote block

this is paragraph text

";
    assert_snapshot!(
        render(md),
        @"<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn code_line() {
    assert_snapshot!(
        render("```\ncode line\n```"),
        @"<div><pre><code>code line</code></pre></div>"
    );
}

#[test]
fn links_and_images() {
    assert_snapshot!(
        render("See ![logo](/logo.png) and [home](https://example.com)."),
        @r#"<div><p>See <img src="/logo.png" alt="logo"></img> and <a href="https://example.com">home</a>.</p></div>"#
    );
}

#[test]
fn broken_ordered_list_is_a_paragraph() {
    assert_snapshot!(
        render("1. a\n3. b"),
        @"<div><p>1. a 3. b</p></div>"
    );
}

#[rstest]
#[case("## this is an h2", "<div><h2>this is an h2</h2></div>")]
#[case("> This is a\n> blockquote block", "<div><blockquote>This is a blockquote block</blockquote></div>")]
#[case("```\ncode line\n```", "<div><pre><code>code line</code></pre></div>")]
#[case("", "<div></div>")]
#[case("\n\n\n", "<div></div>")]
fn single_block_documents(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(render(md), expected);
}

#[test]
fn code_block_content_is_never_tokenized() {
    let md = "```\n**bold** _it_ `tick [link](url) ![img](src)\n```";
    assert_eq!(
        render(md),
        "<div><pre><code>**bold** _it_ `tick [link](url) ![img](src)</code></pre></div>"
    );
}

#[test]
fn code_block_with_indented_blank_line() {
    let md = "intro\n\n```\nfn a() {\n    \n}\n```\n\noutro";
    assert_eq!(
        render(md),
        "<div><p>intro</p><pre><code>fn a() {\n    \n}</code></pre><p>outro</p></div>"
    );
}

#[test]
fn whitespace_only_line_joins_paragraph() {
    assert_eq!(render("para one\n  \npara two"), "<div><p>para one    para two</p></div>");
}

#[test]
fn blank_line_count_between_blocks_does_not_matter() {
    let one = render("# title\n\nbody");
    let five = render("# title\n\n\n\n\n\nbody");
    assert_eq!(one, five);
}

#[test]
fn render_is_repeatable() {
    let node = markdown_to_html_node("# a\n\n- b\n- c").unwrap();
    assert_eq!(node.to_html(), node.to_html());
}

// Errors

#[test]
fn unclosed_bold_aborts_document() {
    let err = markdown_to_html_node("# fine\n\nThis is **bold paragraph").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnclosedDelimiter {
            delimiter: "**",
            ..
        }
    ));
}

#[test]
fn unclosed_delimiter_message_names_the_delimiter() {
    let err = markdown_to_html("an _open italic").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid markdown, formatted section not closed: odd number of `_` in \"an _open italic\""
    );
}

#[test]
fn malformed_list_never_reaches_the_list_converter() {
    // Classified as a paragraph, so the stray line is not an error.
    assert_eq!(
        markdown_to_html("- one\ntwo").unwrap(),
        "<div><p>- one two</p></div>"
    );
}
