/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading block into its level and text.
    ///
    /// The run of `#` must be 1–6 long and immediately followed by a space.
    /// Returns `None` for anything else.
    pub fn split(block: &str) -> Option<(usize, &str)> {
        let level = block.bytes().take_while(|&b| b == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        block[level..].strip_prefix(' ').map(|text| (level, text))
    }

    pub fn is_heading(block: &str) -> bool {
        Self::split(block).is_some()
    }
}
