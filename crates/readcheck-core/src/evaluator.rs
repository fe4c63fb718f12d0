//! The evaluation entry point.
//!
//! [`evaluate`] is a pure function of its inputs: no I/O, no shared state,
//! and the same inputs always produce the same [`EvaluationResult`].
//! Optional collaborators (a phoneme dictionary, a speech sample) sharpen or
//! annotate the result; without them the engine falls back silently.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::{self, Mispronunciation, WordMatch};
use crate::feedback::{self, SLOW_DOWN_ADVICE};
use crate::phonetics::PhonemeLookup;
use crate::phrase::TargetPhrase;
use crate::scoring::{self, PatternResult, Score};
use crate::similarity::SimilarityScorer;
use crate::speech_rate::{MAX_SYLLABLES_PER_SECOND, SpeechSample};
use crate::text;
use crate::thresholds::Thresholds;

/// Word-level findings behind the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDetails {
    /// Target words with no acceptable match, in target order.
    pub missing_words: Vec<String>,
    /// Attempt words that matched nothing, in attempt order.
    pub extra_words: Vec<String>,
    /// Target words matched below the clean threshold.
    pub mispronounced_words: Vec<Mispronunciation>,
    /// Sight word → read cleanly.
    pub sight_word_accuracy: BTreeMap<String, bool>,
    /// Pattern text → read cleanly (duplicate pattern texts collapse).
    pub phonetic_pattern_accuracy: BTreeMap<String, bool>,
    /// Pattern verdicts per word position.
    pub phonetic_pattern_positions: Vec<PatternResult>,
    /// Raw alignment, one entry per target word.
    pub word_matches: Vec<WordMatch>,
}

/// Everything the engine reports for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    /// Human-readable summary.
    pub feedback: String,
    /// Word-level findings.
    pub details: EvaluationDetails,
    /// Headline scores.
    pub score: Score,
}

/// Configured evaluation engine.
///
/// Holds only read-only settings, so one evaluator can serve any number of
/// concurrent calls.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    thresholds: Thresholds,
    max_syllables_per_second: f64,
    phonemes: Option<&'a dyn PhonemeLookup>,
}

impl std::fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("thresholds", &self.thresholds)
            .field("max_syllables_per_second", &self.max_syllables_per_second)
            .field("phonemes", &self.phonemes.is_some())
            .finish()
    }
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Evaluator<'a> {
    /// Evaluator with default thresholds and no dictionary.
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            max_syllables_per_second: MAX_SYLLABLES_PER_SECOND,
            phonemes: None,
        }
    }

    /// Use custom thresholds.
    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Change the speaking rate above which the slow-down hint is added.
    pub const fn with_max_syllables_per_second(mut self, max: f64) -> Self {
        self.max_syllables_per_second = max;
        self
    }

    /// Consult a pronunciation dictionary for the phonetic signal.
    pub fn with_phonemes(mut self, lookup: &'a dyn PhonemeLookup) -> Self {
        self.phonemes = Some(lookup);
        self
    }

    /// The thresholds in use.
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    fn scorer(&self) -> SimilarityScorer<'a> {
        let scorer = SimilarityScorer::new(self.thresholds.sound_alike);
        match self.phonemes {
            Some(lookup) => scorer.with_phonemes(lookup),
            None => scorer,
        }
    }

    /// Score `attempt` against `target`.
    ///
    /// `speech`, when present, only decides whether the slow-down hint is
    /// appended to the feedback.
    #[tracing::instrument(skip_all, fields(target_len = target.text.len(), attempt_len = attempt.len()))]
    pub fn evaluate(
        &self,
        target: &TargetPhrase,
        attempt: &str,
        speech: Option<&SpeechSample>,
    ) -> EvaluationResult {
        let target_words = target.words();
        let attempt_words = text::normalize(attempt);

        let alignment = alignment::align(
            &target_words,
            &attempt_words,
            &self.scorer(),
            &self.thresholds,
        );

        let missing_words = alignment.missing_words();
        let extra_words = alignment.extra_words(&attempt_words);
        let mispronounced_words = alignment.mispronounced(&attempt_words, &self.thresholds);
        let categories = scoring::score(target, &alignment, &self.thresholds);

        let mut feedback = feedback::format_feedback(
            &missing_words,
            &extra_words,
            &mispronounced_words,
            categories.score.sight_words,
            categories.score.phonetic_patterns,
        );
        if speech.is_some_and(|s| s.is_too_fast(self.max_syllables_per_second)) {
            feedback.push_str(SLOW_DOWN_ADVICE);
        }

        debug!(
            overall = categories.score.overall,
            sight_words = categories.score.sight_words,
            phonetic_patterns = categories.score.phonetic_patterns,
            missing = missing_words.len(),
            extra = extra_words.len(),
            mispronounced = mispronounced_words.len(),
            "attempt evaluated"
        );

        EvaluationResult {
            feedback,
            details: EvaluationDetails {
                missing_words,
                extra_words,
                mispronounced_words,
                sight_word_accuracy: categories.sight_word_accuracy,
                phonetic_pattern_accuracy: categories.phonetic_pattern_accuracy,
                phonetic_pattern_positions: categories.pattern_positions,
                word_matches: alignment.matches,
            },
            score: categories.score,
        }
    }
}

/// Evaluate with default thresholds, no dictionary, no speech sample.
pub fn evaluate(target: &TargetPhrase, attempt: &str) -> EvaluationResult {
    Evaluator::new().evaluate(target, attempt, None)
}
