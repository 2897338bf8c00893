//! Estimated reading time for a post's structured content.

use crate::domain::model::Section;

/// Fixed reading rate used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate the reading time of a post in whole minutes.
///
/// Counts whitespace-delimited words across every section heading and body
/// block, then rounds up at 200 words per minute. Pure: the same content
/// always yields the same integer, and empty content yields 0.
pub fn estimate_minutes(content: &[Section]) -> usize {
    let total_words: usize = content.iter().map(section_words).sum();
    total_words.div_ceil(WORDS_PER_MINUTE)
}

fn section_words(section: &Section) -> usize {
    let heading_words = section.heading.split_whitespace().count();
    let body_words: usize = section
        .body
        .iter()
        .map(|block| block.text.split_whitespace().count())
        .sum();
    heading_words + body_words
}
