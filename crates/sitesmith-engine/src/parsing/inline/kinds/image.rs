use crate::parsing::inline::cursor::Cursor;

use super::link::{BracketMatch, Link};

/// Image inline type: a link form prefixed with `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
    /// `!` followed by the link's opening bracket.
    pub const OPEN: &'static [u8] = b"![";

    /// Attempts to match `![alt](url)` at the cursor.
    ///
    /// On success the cursor sits just past the closing `)`; on failure it is
    /// restored.
    pub fn try_match(cur: &mut Cursor<'_>) -> Option<BracketMatch> {
        if !cur.starts_with(Self::OPEN) {
            return None;
        }
        let saved = cur.clone();
        let start = cur.pos();
        cur.bump(); // !
        match Link::scan_brackets(cur) {
            Some(m) => Some(BracketMatch { start, ..m }),
            None => {
                *cur = saved;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_image() {
        let s = "![rick roll](https://i.imgur.com/aKaOqIh.gif) after";
        let mut cur = Cursor::new(s);
        let m = Image::try_match(&mut cur).unwrap();
        assert_eq!(m.start, 0);
        assert_eq!(&s[m.text.0..m.text.1], "rick roll");
        assert_eq!(&s[m.url.0..m.url.1], "https://i.imgur.com/aKaOqIh.gif");
        assert_eq!(&s[m.end..], " after");
        assert_eq!(cur.pos(), m.end);
    }

    #[test]
    fn bare_link_is_not_an_image() {
        let mut cur = Cursor::new("[text](url)");
        assert!(Image::try_match(&mut cur).is_none());
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bang_without_bracket_is_not_an_image() {
        let mut cur = Cursor::new("!important (note)");
        assert!(Image::try_match(&mut cur).is_none());
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn failed_match_restores_cursor() {
        let mut cur = Cursor::new("![alt] (url)");
        assert!(Image::try_match(&mut cur).is_none());
        assert_eq!(cur.pos(), 0);
    }
}
