/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block type matches.
pub struct Paragraph;

impl Paragraph {
    /// Collapses the block's lines into one line joined by single spaces.
    pub fn content(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
