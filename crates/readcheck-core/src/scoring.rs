//! Category scoring: overall, sight-word, and phonetic-pattern scores.
//!
//! Every category uses the same quality test: a word counts only if it was
//! matched at or above the clean threshold. Mispronounced and missing words
//! both count against the score.
//!
//! Percentages are rounded half-up in integer arithmetic. A category the
//! phrase declares nothing for is a vacuous pass (100); a category that is
//! declared but has no entry in the text scores 0.

use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::phrase::TargetPhrase;
use crate::thresholds::Thresholds;

/// The three headline scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Share of target words read cleanly.
    pub overall: u8,
    /// Share of sight-word entries read cleanly.
    pub sight_words: u8,
    /// Share of phonetic-pattern entries read cleanly.
    pub phonetic_patterns: u8,
}

/// Verdict for the phonetic pattern at one word position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternResult {
    /// Word position in the target.
    pub position: usize,
    /// The pattern text.
    pub pattern: String,
    /// Whether the word at `position` was read cleanly.
    pub correct: bool,
}

/// Per-category verdicts and scores for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    /// Sight word → read cleanly. Repeated sight words keep the last verdict.
    pub sight_word_accuracy: BTreeMap<String, bool>,
    /// Pattern text → read cleanly. Positions sharing a pattern text
    /// collapse to one entry; the last position wins.
    pub phonetic_pattern_accuracy: BTreeMap<String, bool>,
    /// The same pattern verdicts, one per position, without collapsing.
    pub pattern_positions: Vec<PatternResult>,
    /// Headline scores.
    pub score: Score,
}

/// `round(100 * numerator / denominator)` half-up; 100 when `denominator` is 0.
pub fn percent(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 100;
    }
    let numerator = numerator.min(denominator) as u64;
    let denominator = denominator as u64;
    let rounded = (200 * numerator + denominator) / (2 * denominator);
    u8::try_from(rounded).unwrap_or(100)
}

/// Score an alignment against the phrase it was produced for.
///
/// `alignment.matches` must be index-aligned with `target.words()`.
/// Sight-word membership compares lower-cased sight words with the
/// normalized target words.
#[tracing::instrument(skip_all, fields(words = alignment.matches.len()))]
pub fn score(
    target: &TargetPhrase,
    alignment: &Alignment,
    thresholds: &Thresholds,
) -> CategoryScores {
    let sight_words: HashSet<String> = target
        .sight_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let mut sight_word_accuracy = BTreeMap::new();
    let mut phonetic_pattern_accuracy = BTreeMap::new();
    let mut pattern_positions = Vec::new();

    for word_match in &alignment.matches {
        let clean = word_match.is_clean(thresholds);

        if sight_words.contains(&word_match.target_word) {
            sight_word_accuracy.insert(word_match.target_word.clone(), clean);
        }

        if let Some(pattern) = target.pattern_at(word_match.target_index) {
            phonetic_pattern_accuracy.insert(pattern.to_string(), clean);
            pattern_positions.push(PatternResult {
                position: word_match.target_index,
                pattern: pattern.to_string(),
                correct: clean,
            });
        }
    }

    let patterns_declared = target.phonetic_patterns.iter().any(|p| !p.is_empty());
    let score = Score {
        overall: percent(alignment.clean_count(thresholds), alignment.matches.len()),
        sight_words: category_percent(!sight_words.is_empty(), &sight_word_accuracy),
        phonetic_patterns: category_percent(patterns_declared, &phonetic_pattern_accuracy),
    };

    CategoryScores {
        sight_word_accuracy,
        phonetic_pattern_accuracy,
        pattern_positions,
        score,
    }
}

/// Score for one category map. Only an undeclared category passes vacuously.
fn category_percent(declared: bool, map: &BTreeMap<String, bool>) -> u8 {
    if !declared {
        return 100;
    }
    if map.is_empty() {
        return 0;
    }
    let clean = map.values().filter(|&&v| v).count();
    percent(clean, map.len())
}
