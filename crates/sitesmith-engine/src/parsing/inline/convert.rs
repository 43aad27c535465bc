use crate::html::{Attributes, HtmlNode};
use crate::parsing::error::ParseError;

use super::{
    parser::text_to_fragments,
    types::{FragmentKind, TextFragment},
};

/// Converts one fragment into the HTML node that displays it.
pub fn text_fragment_to_html_node(fragment: TextFragment) -> HtmlNode {
    let TextFragment { text, kind } = fragment;
    match kind {
        FragmentKind::Plain => HtmlNode::text(text),
        FragmentKind::Bold => HtmlNode::element("b", vec![HtmlNode::text(text)]),
        FragmentKind::Italic => HtmlNode::element("i", vec![HtmlNode::text(text)]),
        FragmentKind::Code => HtmlNode::element("code", vec![HtmlNode::text(text)]),
        FragmentKind::Link { url } => HtmlNode::element_with_attributes(
            "a",
            Attributes::new().with("href", url),
            vec![HtmlNode::text(text)],
        ),
        FragmentKind::Image { url } => {
            HtmlNode::void("img", Attributes::new().with("src", url).with("alt", text))
        }
    }
}

/// Tokenizes `text` and converts every fragment, in order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(text_to_fragments(text)?
        .into_iter()
        .map(text_fragment_to_html_node)
        .collect())
}
