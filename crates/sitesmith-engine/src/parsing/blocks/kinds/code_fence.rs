/// Fenced code block type. The whole block is a raw zone.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// An opening and a closing fence with nothing required in between.
    const MIN_LEN: usize = 2 * Self::BACKTICKS.len();

    /// True if the block starts and ends with a fence that don't overlap.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= Self::MIN_LEN
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The raw text between the fences, untrimmed.
    pub fn inner(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        Some(&block[Self::BACKTICKS.len()..block.len() - Self::BACKTICKS.len()])
    }
}
