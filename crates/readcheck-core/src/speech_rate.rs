//! Speaking-rate advisory.
//!
//! The engine does no audio processing. Callers that know how long an attempt
//! took pass a [`SpeechSample`]; a fast rate only adds a hint to the feedback
//! and never affects scores.

use std::time::Duration;

use crate::dictionaries::syllable_dict;

/// Above this many syllables per second the reader is asked to slow down.
pub const MAX_SYLLABLES_PER_SECOND: f64 = 5.5;

/// Duration and syllable count of one spoken attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechSample {
    /// How long the attempt took.
    pub duration: Duration,
    /// Syllables spoken.
    pub syllables: usize,
}

impl SpeechSample {
    /// A sample with a known syllable count.
    pub const fn new(duration: Duration, syllables: usize) -> Self {
        Self {
            duration,
            syllables,
        }
    }

    /// A sample whose syllables are counted from the spoken text.
    pub fn for_text(text: &str, duration: Duration) -> Self {
        Self::new(duration, syllable_dict::count_text_syllables(text))
    }

    /// Syllables per second, or `None` for a zero-length recording.
    pub fn syllables_per_second(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        (secs > 0.0).then(|| self.syllables as f64 / secs)
    }

    /// Whether the rate exceeds `max_per_second`.
    pub fn is_too_fast(&self, max_per_second: f64) -> bool {
        self.syllables_per_second()
            .is_some_and(|rate| rate > max_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_from_text() {
        let sample = SpeechSample::for_text("We can win", Duration::from_millis(1500));
        assert_eq!(sample.syllables, 3);
        assert_eq!(sample.syllables_per_second(), Some(2.0));
        assert!(!sample.is_too_fast(MAX_SYLLABLES_PER_SECOND));
    }

    #[test]
    fn fast_reading_flagged() {
        let sample = SpeechSample::new(Duration::from_millis(500), 3);
        assert!(sample.is_too_fast(MAX_SYLLABLES_PER_SECOND));
    }

    #[test]
    fn zero_duration_has_no_rate() {
        let sample = SpeechSample::new(Duration::ZERO, 3);
        assert_eq!(sample.syllables_per_second(), None);
        assert!(!sample.is_too_fast(MAX_SYLLABLES_PER_SECOND));
    }
}
