//! Core library for readcheck.
//!
//! Scores a spoken attempt at a short practice phrase against the phrase the
//! student was asked to read. Evaluation is a pure function: give it the
//! target and the transcribed attempt, get back word-level findings,
//! category scores and a feedback sentence.
//!
//! # Modules
//!
//! - [`evaluator`] - The evaluation entry point
//! - [`alignment`] - Greedy target-to-attempt word alignment
//! - [`similarity`] - Word-pair similarity signals
//! - [`phonetics`] - Sound-alike keys and phoneme dictionaries
//! - [`scoring`] - Overall, sight-word and phonetic-pattern scores
//! - [`feedback`] - The feedback sentence
//! - [`catalog`] - Built-in and configured phrase sets
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readcheck_core::{TargetPhrase, evaluate};
//!
//! let target = TargetPhrase::new("We can win").with_sight_words(["we", "can"]);
//! let result = evaluate(&target, "we can wun");
//!
//! assert_eq!(result.score.overall, 67);
//! assert_eq!(result.details.mispronounced_words[0].attempted, "wun");
//! ```
#![deny(unsafe_code)]

pub mod alignment;
pub mod catalog;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod phonetics;
pub mod phrase;
pub mod scoring;
pub mod similarity;
pub mod speech_rate;
pub mod text;
pub mod thresholds;

pub use alignment::{Mispronunciation, WordMatch};
pub use catalog::PhraseCatalog;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    CatalogError, CatalogResult, ConfigError, ConfigResult, PhonemeError, PhonemeResult,
};
pub use evaluator::{EvaluationDetails, EvaluationResult, Evaluator, evaluate};
pub use phonetics::{PhonemeDictionary, PhonemeLookup};
pub use phrase::{Difficulty, Phrase, PhraseSet, TargetPhrase};
pub use scoring::{PatternResult, Score};
pub use speech_rate::SpeechSample;
pub use thresholds::Thresholds;
