//! Word normalization.
//!
//! Target text and attempt transcripts go through the same tokenizer so word
//! positions on both sides are comparable.

/// Lower-case `text` and split it into words on runs of whitespace.
///
/// Punctuation stays attached to its word: `"stop!"` and `"stop"` are
/// different tokens, and the similarity scorer sees the difference.
pub fn normalize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Number of words `normalize` would produce, without allocating them.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
