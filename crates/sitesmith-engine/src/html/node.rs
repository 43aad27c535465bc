use std::fmt;

use super::attributes::Attributes;

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text leaf. Rendered verbatim.
    Text(String),
    /// A tagged container.
    Element {
        tag: String,
        attributes: Attributes,
        children: Vec<HtmlNode>,
    },
    /// A tagged element that never holds children (e.g. `img`).
    Void { tag: String, attributes: Attributes },
}

impl HtmlNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A container with no attributes.
    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children,
        }
    }

    pub fn element_with_attributes(
        tag: impl Into<String>,
        attributes: Attributes,
        children: Vec<HtmlNode>,
    ) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    pub fn void(tag: impl Into<String>, attributes: Attributes) -> Self {
        Self::Void {
            tag: tag.into(),
            attributes,
        }
    }

    /// The tag name, or `None` for a text leaf.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Element { tag, .. } | Self::Void { tag, .. } => Some(tag.as_str()),
        }
    }

    /// The literal text of a leaf.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Children of a container; empty for leaves and void elements.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Element { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Text(_) => None,
            Self::Element { attributes, .. } | Self::Void { attributes, .. } => Some(attributes),
        }
    }

    /// Renders this node and its subtree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element {
                tag,
                attributes,
                children,
            } => {
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out);
                }
                close_tag(out, tag);
            }
            Self::Void { tag, attributes } => {
                open_tag(out, tag, attributes);
                close_tag(out, tag);
            }
        }
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
