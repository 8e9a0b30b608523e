use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::language_utils;
use crate::segmenter::SplitPolicy;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Bounds for the split policy options. The core validates against these
/// and never clamps; a value outside its domain fails the conversion.
pub const MIN_SENTENCE_LENGTH: usize = 1;
pub const MAX_SENTENCE_LENGTH: usize = 20;
pub const MIN_SENTENCE_TIME_SECS: f64 = 1.0;
pub const MAX_SENTENCE_TIME_SECS: f64 = 20.0;
pub const MIN_TIME_OFFSET_SECS: f64 = -5.0;
pub const MAX_TIME_OFFSET_SECS: f64 = 5.0;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language code the audio is transcribed in (ISO 639-1).
    /// Passed through to the transcription collaborator; the segmentation
    /// core does not consume it.
    #[serde(default = "default_language")]
    pub language: String,

    /// Max words per sentence before a forced close
    #[serde(default = "default_max_sentence_length")]
    pub max_sentence_length: usize,

    /// Max sentence duration in seconds before a forced close
    #[serde(default = "default_max_sentence_time")]
    pub max_sentence_time: f64,

    /// Signed shift in seconds applied to every cue timestamp
    #[serde(default)]
    pub time_offset: f64,

    /// Trailing characters that force a sentence close.
    /// Each entry must be exactly one character; an empty list disables
    /// forced splitting entirely.
    #[serde(default = "default_split_chars")]
    pub split_chars: Vec<String>,

    /// Container format for the output document
    #[serde(default)]
    pub format: SubtitleFormat,

    /// Timestamp precision
    #[serde(default)]
    pub timestamp_precision: TimestampPrecision,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output container format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: Plain numbered cue blocks, comma millisecond separator
    #[default]
    Srt,
    // @format: WEBVTT signature, dot millisecond separator
    Vtt,
}

impl SubtitleFormat {
    // @returns: File extension without the dot
    pub fn extension(&self) -> &str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    // @returns: Capitalized format name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Srt => "SRT",
            Self::Vtt => "WebVTT",
        }
    }
}

// Implement Display trait for SubtitleFormat
impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Millisecond handling for cue timestamps.
///
/// `Seconds` reproduces the output of earlier releases, which always wrote
/// a `,000` millisecond field. That truncation loses sub-second timing and
/// exists only as a compatibility mode for byte-identical legacy output.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    /// True millisecond remainder, zero-padded to 3 digits
    #[default]
    Milliseconds,
    /// Legacy whole-second timestamps with a fixed ,000 field
    Seconds,
}

impl TimestampPrecision {
    /// Apply the precision to a millisecond timestamp.
    pub fn apply(&self, ms: u64) -> u64 {
        match self {
            Self::Milliseconds => ms,
            Self::Seconds => ms / 1_000 * 1_000,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_sentence_length() -> usize {
    5
}

fn default_max_sentence_time() -> f64 {
    5.0
}

fn default_split_chars() -> Vec<String> {
    vec![".".to_string(), "!".to_string(), "?".to_string()]
}

impl Config {
    /// Validate the configuration for consistency and allowed ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SENTENCE_LENGTH..=MAX_SENTENCE_LENGTH).contains(&self.max_sentence_length) {
            return Err(ConfigError::SentenceLengthOutOfRange(
                self.max_sentence_length,
            ));
        }

        if !(MIN_SENTENCE_TIME_SECS..=MAX_SENTENCE_TIME_SECS).contains(&self.max_sentence_time) {
            return Err(ConfigError::SentenceTimeOutOfRange(self.max_sentence_time));
        }

        if !(MIN_TIME_OFFSET_SECS..=MAX_TIME_OFFSET_SECS).contains(&self.time_offset) {
            return Err(ConfigError::TimeOffsetOutOfRange(self.time_offset));
        }

        for entry in &self.split_chars {
            if entry.chars().count() != 1 {
                return Err(ConfigError::InvalidSplitChar(entry.clone()));
            }
        }

        language_utils::validate_language_code(&self.language)?;

        Ok(())
    }

    /// Build the split policy for one segmentation pass.
    ///
    /// Call after `validate`; the policy carries the values as-is.
    pub fn split_policy(&self) -> SplitPolicy {
        SplitPolicy {
            max_words: self.max_sentence_length,
            max_duration_secs: self.max_sentence_time,
            split_chars: self
                .split_chars
                .iter()
                .filter_map(|s| s.chars().next())
                .collect(),
            time_offset_secs: self.time_offset,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            max_sentence_length: default_max_sentence_length(),
            max_sentence_time: default_max_sentence_time(),
            time_offset: 0.0,
            split_chars: default_split_chars(),
            format: SubtitleFormat::default(),
            timestamp_precision: TimestampPrecision::default(),
            log_level: LogLevel::default(),
        }
    }
}
