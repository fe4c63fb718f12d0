//! Human-readable feedback.

use crate::alignment::Mispronunciation;

/// Shown when there is nothing else to say.
pub const PERFECT_FEEDBACK: &str = "Perfect pronunciation!";

/// Appended when the attempt was read too quickly.
pub const SLOW_DOWN_ADVICE: &str = " Try speaking slower for clearer pronunciation.";

/// Build the feedback sentence for an attempt.
///
/// Clauses for missing, extra and mispronounced words appear only when the
/// list is non-empty; the two accuracy clauses always appear. Clauses are
/// joined with `". "`.
pub fn format_feedback(
    missing: &[String],
    extra: &[String],
    mispronounced: &[Mispronunciation],
    sight_word_score: u8,
    phonetic_score: u8,
) -> String {
    let mut parts = Vec::with_capacity(5);

    if !missing.is_empty() {
        parts.push(format!("Missing words: {}", missing.join(", ")));
    }

    if !extra.is_empty() {
        parts.push(format!("Extra words: {}", extra.join(", ")));
    }

    if !mispronounced.is_empty() {
        let listed: Vec<String> = mispronounced
            .iter()
            .map(|m| format!("{} (as {})", m.word, m.attempted))
            .collect();
        parts.push(format!("Mispronounced: {}", listed.join(", ")));
    }

    parts.push(format!("Sight word accuracy: {sight_word_score}%"));
    parts.push(format!("Phonetic accuracy: {phonetic_score}%"));

    let joined = parts.join(". ");
    if joined.is_empty() {
        PERFECT_FEEDBACK.to_string()
    } else {
        joined
    }
}
