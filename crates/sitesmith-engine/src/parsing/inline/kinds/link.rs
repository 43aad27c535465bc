use crate::parsing::inline::cursor::Cursor;

/// Link inline type with owned delimiter constants.
pub struct Link;

/// Byte ranges of a matched `[text](url)` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    /// Start of the whole construct (including a leading `!` for images).
    pub start: usize,
    /// End of the whole construct, just past `)`.
    pub end: usize,
    /// Anchor or alt text, between the brackets.
    pub text: (usize, usize),
    /// URL, between the parentheses.
    pub url: (usize, usize),
}

impl Link {
    pub const OPEN_TEXT: u8 = b'[';
    pub const CLOSE_TEXT: u8 = b']';
    pub const OPEN_URL: u8 = b'(';
    pub const CLOSE_URL: u8 = b')';

    /// Attempts to match `[text](url)` at the cursor.
    ///
    /// A `[` directly preceded by `!` belongs to an image and never starts a
    /// link. On failure the cursor is restored.
    pub fn try_match(cur: &mut Cursor<'_>) -> Option<BracketMatch> {
        if cur.peek() != Some(Self::OPEN_TEXT) || cur.prev() == Some(super::Image::BANG) {
            return None;
        }
        let saved = cur.clone();
        let m = Self::scan_brackets(cur);
        if m.is_none() {
            *cur = saved;
        }
        m
    }

    /// Scans `[text](url)` starting on the `[`.
    ///
    /// The text may not contain brackets and the url may not contain
    /// parentheses. The cursor is left wherever scanning stopped.
    pub(crate) fn scan_brackets(cur: &mut Cursor<'_>) -> Option<BracketMatch> {
        let start = cur.pos();
        if cur.bump() != Some(Self::OPEN_TEXT) {
            return None;
        }
        let text = cur.scan_until(Self::CLOSE_TEXT, &[Self::OPEN_TEXT])?;
        cur.bump(); // ]
        if cur.bump() != Some(Self::OPEN_URL) {
            return None;
        }
        let url = cur.scan_until(Self::CLOSE_URL, &[Self::OPEN_URL])?;
        cur.bump(); // )
        Some(BracketMatch {
            start,
            end: cur.pos(),
            text,
            url,
        })
    }
}
