/// A byte cursor for scanning inline text.
///
/// Every construct the tokenizer recognises starts and ends on an ASCII
/// byte, so slicing `s` at a position the cursor stopped on after a
/// successful match always lands on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte immediately before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|p| self.s.as_bytes().get(p).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `stop` is found, failing on any byte in `reject`.
    ///
    /// On success the cursor rests on `stop` and the consumed range is
    /// returned. On failure the cursor position is unspecified; callers
    /// restore a saved copy.
    pub fn scan_until(&mut self, stop: u8, reject: &[u8]) -> Option<(usize, usize)> {
        let start = self.i;
        loop {
            let b = self.peek()?;
            if b == stop {
                return Some((start, self.i));
            }
            if reject.contains(&b) {
                return None;
            }
            self.i += 1;
        }
    }
}
