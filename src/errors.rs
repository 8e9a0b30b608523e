/*!
 * Error types for the subit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised when a configuration value falls outside its declared domain.
///
/// These fail the whole conversion before any segmentation occurs; the core
/// never silently clamps a caller-supplied value.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Max words per sentence outside 1..=20
    #[error("max sentence length {0} is out of range ({min}-{max} words)",
        min = crate::app_config::MIN_SENTENCE_LENGTH,
        max = crate::app_config::MAX_SENTENCE_LENGTH)]
    SentenceLengthOutOfRange(usize),

    /// Max sentence duration outside 1..=20 seconds
    #[error("max sentence time {0}s is out of range ({min}-{max} seconds)",
        min = crate::app_config::MIN_SENTENCE_TIME_SECS,
        max = crate::app_config::MAX_SENTENCE_TIME_SECS)]
    SentenceTimeOutOfRange(f64),

    /// Cue time offset outside -5..=5 seconds
    #[error("time offset {0}s is out of range ({min}-{max} seconds)",
        min = crate::app_config::MIN_TIME_OFFSET_SECS,
        max = crate::app_config::MAX_TIME_OFFSET_SECS)]
    TimeOffsetOutOfRange(f64),

    /// A split entry that is not exactly one character
    #[error("split entries must be single characters, got {0:?}")]
    InvalidSplitChar(String),

    /// Language code not in the supported transcription set
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),
}

/// Errors that can occur while reading the transcription collaborator's output
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The transcript JSON could not be parsed
    #[error("failed to parse transcript JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The transcript parsed but carries no word-level timestamps
    #[error("transcript has no word-level timestamps (was it requested with word granularity?)")]
    MissingWords,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from transcript parsing
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
