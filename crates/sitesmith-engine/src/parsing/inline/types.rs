/// The kind of an inline fragment.
///
/// Links and images carry their URL in the variant, so a target exists
/// exactly when the kind is `Link` or `Image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentKind {
    /// Text that isn't part of any special construct.
    Plain,
    Bold,
    Italic,
    /// Inline code. Never re-scanned for other markup.
    Code,
    /// `[anchor](url)`
    Link { url: String },
    /// `![alt](url)`
    Image { url: String },
}

/// A typed unit of inline content produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Visible text: anchor text for links, alt text for images.
    pub text: String,
    pub kind: FragmentKind,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, FragmentKind::Image { url: url.into() })
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            FragmentKind::Link { url } | FragmentKind::Image { url } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, FragmentKind::Plain)
    }
}
