use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies one trimmed block.
///
/// Rules are tried in precedence order and the first match wins: heading,
/// code, quote, unordered list, ordered list, then paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if Heading::is_heading(block) {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockType::Quote;
    }
    if UnorderedList::is_list(block) {
        return BlockType::UnorderedList;
    }
    if block.starts_with(OrderedList::FIRST) {
        match OrderedList::first_misnumbered_line(block) {
            None => return BlockType::OrderedList,
            Some(line) => {
                log::debug!("ordered list numbering breaks at line {line}, treating block as paragraph");
            }
        }
    }
    BlockType::Paragraph
}
