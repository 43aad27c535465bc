/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other block type matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Fenced with ``` on both ends. Raw zone: no inline parsing.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... consecutively.
    OrderedList,
}
