use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{BracketMatch, Delimiter, Image, Link},
    types::{FragmentKind, TextFragment},
};

/// Tokenizes inline text into an ordered sequence of [`TextFragment`]s.
///
/// # Pipeline
/// Starting from one plain fragment holding all of `text`:
/// 1. images (`![alt](url)`) are extracted,
/// 2. then links (`[text](url)`),
/// 3. then each [`Delimiter`] in [`Delimiter::ALL`] order splits what is
///    still plain.
///
/// Every stage only looks at plain fragments, so link text, image alt text
/// and styled spans are never re-scanned.
///
/// # Errors
/// [`ParseError::UnclosedDelimiter`] if any plain fragment holds an odd number
/// of a delimiter.
pub fn text_to_fragments(text: &str) -> Result<Vec<TextFragment>, ParseError> {
    let mut nodes = vec![TextFragment::plain(text)];
    nodes = split_nodes_image(nodes);
    nodes = split_nodes_link(nodes);
    for delimiter in Delimiter::ALL {
        nodes = split_nodes_delimiter(nodes, delimiter)?;
    }
    Ok(nodes)
}

/// Splits plain fragments around `![alt](url)` images.
pub fn split_nodes_image(nodes: Vec<TextFragment>) -> Vec<TextFragment> {
    split_nodes_matching(nodes, Image::try_match, |alt, url| {
        TextFragment::image(alt, url)
    })
}

/// Splits plain fragments around `[text](url)` links.
pub fn split_nodes_link(nodes: Vec<TextFragment>) -> Vec<TextFragment> {
    split_nodes_matching(nodes, Link::try_match, |text, url| {
        TextFragment::link(text, url)
    })
}

/// Splits every plain fragment on `delimiter`.
///
/// Segments alternate plain/styled starting with plain. Empty segments are
/// dropped, so adjacent markers never produce empty fragments.
pub fn split_nodes_delimiter(
    nodes: Vec<TextFragment>,
    delimiter: Delimiter,
) -> Result<Vec<TextFragment>, ParseError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let sections: Vec<&str> = node.text.split(marker).collect();
        if sections.len() % 2 == 0 {
            return Err(ParseError::UnclosedDelimiter {
                delimiter: marker,
                text: node.text.clone(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                FragmentKind::Plain
            } else {
                delimiter.kind()
            };
            out.push(TextFragment::new(section, kind));
        }
    }

    Ok(out)
}

/// Returns `(alt, url)` for every image in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    extract_matching(text, Image::try_match)
}

/// Returns `(anchor, url)` for every link in `text`, left to right.
///
/// Image syntax is not reported as a link.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    extract_matching(text, Link::try_match)
}

type TryMatch = fn(&mut Cursor<'_>) -> Option<BracketMatch>;

/// Finds every match of `try_match` in `s`, scanning left to right and
/// resuming after each match.
fn scan_matches(s: &str, try_match: TryMatch) -> Vec<BracketMatch> {
    let mut cur = Cursor::new(s);
    let mut found = vec![];
    while !cur.eof() {
        if let Some(m) = try_match(&mut cur) {
            found.push(m);
            continue;
        }
        cur.bump();
    }
    found
}

fn extract_matching(text: &str, try_match: TryMatch) -> Vec<(&str, &str)> {
    scan_matches(text, try_match)
        .into_iter()
        .map(|m| (&text[m.text.0..m.text.1], &text[m.url.0..m.url.1]))
        .collect()
}

fn split_nodes_matching(
    nodes: Vec<TextFragment>,
    try_match: TryMatch,
    build: fn(&str, &str) -> TextFragment,
) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let matches = scan_matches(&node.text, try_match);
        if matches.is_empty() {
            out.push(node);
            continue;
        }

        let s = node.text.as_str();
        let mut text_start = 0;
        for m in matches {
            if m.start > text_start {
                out.push(TextFragment::plain(&s[text_start..m.start]));
            }
            out.push(build(&s[m.text.0..m.text.1], &s[m.url.0..m.url.1]));
            text_start = m.end;
        }
        if text_start < s.len() {
            out.push(TextFragment::plain(&s[text_start..]));
        }
    }

    out
}
