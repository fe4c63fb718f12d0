//! Scoring thresholds.
//!
//! The acceptance and clean-match thresholds are independent tunables. The
//! defaults below are what every stored score was computed with, so changing
//! them changes scored outcomes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A candidate must score strictly above this to be matched at all.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.6;

/// A matched word scoring at or above this counts as correctly pronounced.
pub const CLEAN_THRESHOLD: f64 = 0.9;

/// Similarity credited when two words only agree on their sound-alike key.
///
/// Sits inside the mispronounced band: a vowel swap like "win"/"wun" is
/// accepted but never counted as clean on this signal alone.
pub const SOUND_ALIKE_CREDIT: f64 = 0.75;

/// Threshold set used by the aligner and category scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum similarity (exclusive) for a match.
    pub acceptance: f64,
    /// Minimum similarity (inclusive) for a clean match.
    pub clean: f64,
    /// Similarity contributed by a sound-alike key hit.
    pub sound_alike: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            acceptance: ACCEPTANCE_THRESHOLD,
            clean: CLEAN_THRESHOLD,
            sound_alike: SOUND_ALIKE_CREDIT,
        }
    }
}

impl Thresholds {
    /// Check that `0 <= acceptance < clean <= 1` and `sound_alike` is in `[0, 1]`.
    pub fn validate(self) -> ConfigResult<Self> {
        let unit = 0.0..=1.0;
        let ordered = unit.contains(&self.acceptance)
            && unit.contains(&self.clean)
            && self.acceptance < self.clean
            && unit.contains(&self.sound_alike);
        if ordered {
            Ok(self)
        } else {
            Err(ConfigError::InvalidThresholds {
                acceptance: self.acceptance,
                clean: self.clean,
                sound_alike: self.sound_alike,
            })
        }
    }

    /// Whether a similarity is good enough to be matched.
    pub fn accepts(&self, similarity: f64) -> bool {
        similarity > self.acceptance
    }

    /// Whether a matched similarity counts as correctly pronounced.
    pub fn is_clean(&self, similarity: f64) -> bool {
        similarity >= self.clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn acceptance_is_exclusive() {
        let t = Thresholds::default();
        assert!(!t.accepts(0.6));
        assert!(t.accepts(0.6000001));
    }

    #[test]
    fn clean_is_inclusive() {
        let t = Thresholds::default();
        assert!(t.is_clean(0.9));
        assert!(!t.is_clean(0.89));
    }

    #[test]
    fn out_of_order_rejected() {
        let t = Thresholds {
            acceptance: 0.9,
            clean: 0.6,
            sound_alike: 0.75,
        };
        assert!(matches!(
            t.validate(),
            Err(ConfigError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn out_of_range_rejected() {
        let t = Thresholds {
            sound_alike: 1.5,
            ..Thresholds::default()
        };
        assert!(t.validate().is_err());
    }
}
