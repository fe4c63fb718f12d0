//! Error types for readcheck-core.
//!
//! Evaluation itself is infallible; these errors only arise at the edges
//! (configuration, catalog lookup, dictionary loading).

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// Scoring thresholds are out of range or out of order.
    #[error(
        "invalid thresholds: need 0 <= acceptance ({acceptance}) < clean ({clean}) <= 1 \
         and 0 <= sound_alike ({sound_alike}) <= 1"
    )]
    InvalidThresholds {
        /// Configured acceptance threshold.
        acceptance: f64,
        /// Configured clean-match threshold.
        clean: f64,
        /// Configured sound-alike credit.
        sound_alike: f64,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from phrase catalog lookups.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// No phrase with the requested id exists in any set.
    #[error("unknown phrase: {id}")]
    UnknownPhrase {
        /// The phrase id that was requested.
        id: String,
    },

    /// No phrase set with the requested id exists.
    #[error("unknown phrase set: {id}. Use: {available}")]
    UnknownSet {
        /// The set id that was requested.
        id: String,
        /// Comma-separated list of available set ids.
        available: String,
    },
}

/// Result type alias using [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from loading a pronunciation dictionary.
#[derive(Error, Debug)]
pub enum PhonemeError {
    /// The dictionary file could not be read.
    #[error("failed to read phoneme dictionary {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line had a word but no phonemes.
    #[error("malformed dictionary entry on line {line}: {content:?}")]
    MalformedEntry {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}

/// Result type alias using [`PhonemeError`].
pub type PhonemeResult<T> = Result<T, PhonemeError>;
