use crate::parsing::inline::types::FragmentKind;

/// A symmetric inline delimiter: the same marker opens and closes a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
}

impl Delimiter {
    /// Split order. Bold goes first so its two-character marker is consumed
    /// before any single-character one.
    pub const ALL: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    /// The fragment kind for text between a pair of markers.
    pub fn kind(self) -> FragmentKind {
        match self {
            Delimiter::Bold => FragmentKind::Bold,
            Delimiter::Italic => FragmentKind::Italic,
            Delimiter::Code => FragmentKind::Code,
        }
    }
}
