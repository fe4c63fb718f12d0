//! Word-pair similarity.
//!
//! Three signals, combined with `max`:
//!
//! 1. Sørensen–Dice bigram overlap.
//! 2. A phonetic signal: phoneme agreement from a dictionary when both words
//!    are known, otherwise the coarse sound-alike key.
//! 3. Edit distance normalized by the target word's length.
//!
//! Any one strong signal is enough to accept a word.

use serde::Serialize;

use crate::phonetics::{self, PhonemeLookup};
use crate::thresholds::SOUND_ALIKE_CREDIT;

/// The individual signals behind a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    /// Bigram overlap in `[0, 1]`.
    pub string: f64,
    /// Phoneme agreement or sound-alike credit in `[0, 1]`.
    pub phonetic: f64,
    /// `1 - distance / target_len`, floored at 0.
    pub edit: f64,
}

impl SimilarityBreakdown {
    /// The combined score: the strongest signal.
    pub fn combined(&self) -> f64 {
        self.string.max(self.phonetic).max(self.edit).clamp(0.0, 1.0)
    }
}

/// Scores how closely an attempted word matches a target word.
#[derive(Clone, Copy)]
pub struct SimilarityScorer<'a> {
    phonemes: Option<&'a dyn PhonemeLookup>,
    sound_alike_credit: f64,
}

impl std::fmt::Debug for SimilarityScorer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("phonemes", &self.phonemes.is_some())
            .field("sound_alike_credit", &self.sound_alike_credit)
            .finish()
    }
}

impl Default for SimilarityScorer<'_> {
    fn default() -> Self {
        Self::new(SOUND_ALIKE_CREDIT)
    }
}

impl<'a> SimilarityScorer<'a> {
    /// Scorer without a phoneme dictionary.
    pub const fn new(sound_alike_credit: f64) -> Self {
        Self {
            phonemes: None,
            sound_alike_credit,
        }
    }

    /// Consult `lookup` for words it knows.
    pub fn with_phonemes(mut self, lookup: &'a dyn PhonemeLookup) -> Self {
        self.phonemes = Some(lookup);
        self
    }

    /// Similarity of `attempt` to `target` in `[0, 1]`.
    pub fn similarity(&self, target: &str, attempt: &str) -> f64 {
        self.breakdown(target, attempt).combined()
    }

    /// All three signals for a word pair.
    pub fn breakdown(&self, target: &str, attempt: &str) -> SimilarityBreakdown {
        SimilarityBreakdown {
            string: string_similarity(target, attempt),
            phonetic: self.phonetic_similarity(target, attempt),
            edit: edit_similarity(target, attempt),
        }
    }

    fn phonetic_similarity(&self, target: &str, attempt: &str) -> f64 {
        if let Some(lookup) = self.phonemes
            && let Some(target_phonemes) = lookup.phonemes(target)
            && let Some(attempt_phonemes) = lookup.phonemes(attempt)
        {
            return phonetics::phoneme_agreement(target_phonemes, attempt_phonemes);
        }

        if phonetics::sounds_alike(target, attempt) {
            self.sound_alike_credit
        } else {
            0.0
        }
    }
}

/// Sørensen–Dice coefficient over character bigrams.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

/// `1 - levenshtein(target, attempt) / len(target)`, never below 0.
///
/// Lengths are counted in characters, not bytes.
pub fn edit_similarity(target: &str, attempt: &str) -> f64 {
    let len = target.chars().count();
    if len == 0 {
        return if attempt.is_empty() { 1.0 } else { 0.0 };
    }
    let distance = strsim::levenshtein(target, attempt);
    (1.0 - distance as f64 / len as f64).max(0.0)
}

/// Similarity with the default scorer (no dictionary).
pub fn similarity(target: &str, attempt: &str) -> f64 {
    SimilarityScorer::default().similarity(target, attempt)
}
