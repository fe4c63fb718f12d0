//! Greedy word alignment.
//!
//! Target words are processed strictly left to right. Each one takes the
//! best-scoring attempt word not already taken by an earlier target word;
//! ties go to the lowest attempt index. There is no backtracking, and the
//! result is intentionally not a globally optimal assignment: stored scores
//! depend on this exact procedure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::similarity::SimilarityScorer;
use crate::thresholds::Thresholds;

/// Alignment outcome for one target word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    /// Position of the word in the normalized target.
    pub target_index: usize,
    /// The normalized target word.
    pub target_word: String,
    /// Attempt word consumed by this target word, if any.
    pub matched_attempt_index: Option<usize>,
    /// Similarity of the consumed attempt word; 0 when unmatched.
    pub similarity: f64,
}

/// How a target word was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    /// Matched at or above the clean threshold.
    Clean,
    /// Matched, but below the clean threshold.
    Mispronounced,
    /// No attempt word was acceptable.
    Missing,
}

impl WordMatch {
    /// Classify this match against `thresholds`.
    pub fn quality(&self, thresholds: &Thresholds) -> MatchQuality {
        match self.matched_attempt_index {
            None => MatchQuality::Missing,
            Some(_) if thresholds.is_clean(self.similarity) => MatchQuality::Clean,
            Some(_) => MatchQuality::Mispronounced,
        }
    }

    /// Whether the word was read cleanly.
    pub fn is_clean(&self, thresholds: &Thresholds) -> bool {
        self.quality(thresholds) == MatchQuality::Clean
    }
}

/// A target word that was matched but not cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Mispronunciation {
    /// The target word.
    pub word: String,
    /// The attempt word it was matched with.
    pub attempted: String,
}

/// Result of aligning an attempt against a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// One entry per target word, in target order.
    pub matches: Vec<WordMatch>,
    /// Attempt indices never consumed, in attempt order.
    pub extra_indices: Vec<usize>,
}

impl Alignment {
    /// Target words with no acceptable match, in target order.
    pub fn missing_words(&self) -> Vec<String> {
        self.matches
            .iter()
            .filter(|m| m.matched_attempt_index.is_none())
            .map(|m| m.target_word.clone())
            .collect()
    }

    /// Attempt words never consumed, in attempt order.
    pub fn extra_words(&self, attempt_words: &[String]) -> Vec<String> {
        self.extra_indices
            .iter()
            .filter_map(|&i| attempt_words.get(i).cloned())
            .collect()
    }

    /// Matched-but-unclean target words with the attempt word they took.
    pub fn mispronounced(
        &self,
        attempt_words: &[String],
        thresholds: &Thresholds,
    ) -> Vec<Mispronunciation> {
        self.matches
            .iter()
            .filter(|m| m.quality(thresholds) == MatchQuality::Mispronounced)
            .filter_map(|m| {
                let attempted = attempt_words.get(m.matched_attempt_index?)?;
                Some(Mispronunciation {
                    word: m.target_word.clone(),
                    attempted: attempted.clone(),
                })
            })
            .collect()
    }

    /// Number of target words read cleanly.
    pub fn clean_count(&self, thresholds: &Thresholds) -> usize {
        self.matches
            .iter()
            .filter(|m| m.is_clean(thresholds))
            .count()
    }
}

/// Align attempt words onto target words.
///
/// Never fails: empty inputs produce all-missing or all-extra alignments.
#[tracing::instrument(skip_all, fields(targets = target_words.len(), attempts = attempt_words.len()))]
pub fn align(
    target_words: &[String],
    attempt_words: &[String],
    scorer: &SimilarityScorer<'_>,
    thresholds: &Thresholds,
) -> Alignment {
    let mut consumed = vec![false; attempt_words.len()];
    let mut matches = Vec::with_capacity(target_words.len());

    for (target_index, target_word) in target_words.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;

        for (i, attempt_word) in attempt_words.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            let score = scorer.similarity(target_word, attempt_word);
            // strict comparison: an equal score never displaces an earlier candidate
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
        }

        let accepted = best.filter(|&(_, score)| thresholds.accepts(score));
        trace!(
            target_index,
            target_word = %target_word,
            ?best,
            accepted = accepted.is_some(),
            "aligned target word"
        );

        let word_match = match accepted {
            Some((i, score)) => {
                consumed[i] = true;
                WordMatch {
                    target_index,
                    target_word: target_word.clone(),
                    matched_attempt_index: Some(i),
                    similarity: score,
                }
            }
            None => WordMatch {
                target_index,
                target_word: target_word.clone(),
                matched_attempt_index: None,
                similarity: 0.0,
            },
        };
        matches.push(word_match);
    }

    let extra_indices = consumed
        .iter()
        .enumerate()
        .filter(|&(_, &taken)| !taken)
        .map(|(i, _)| i)
        .collect();

    Alignment {
        matches,
        extra_indices,
    }
}
