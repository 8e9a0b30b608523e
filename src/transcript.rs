use serde::{Deserialize, Serialize};
use crate::errors::TranscriptError;

// @module: Word-level transcript input model

/// A single transcribed word with its own time range.
///
/// Field names follow the transcription collaborator's verbose JSON output,
/// so a response deserializes without renames. Timestamps are seconds from
/// the start of the media. The word sequence is non-decreasing in `start`;
/// that ordering is the collaborator's guarantee and is not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptWord {
    // @field: Word text as transcribed
    pub word: String,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,
}

impl TranscriptWord {
    /// Creates a new word - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(word: &str, start: f64, end: f64) -> Self {
        TranscriptWord {
            word: word.to_string(),
            start,
            end,
        }
    }

    /// Duration of this word in seconds
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}

/// A whole transcription response from the speech-to-text collaborator.
///
/// Only the fields this tool consumes are modeled; unknown fields in the
/// response are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcription {
    /// Task reported by the collaborator (e.g. "transcribe")
    #[serde(default)]
    pub task: Option<String>,

    /// Language the audio was transcribed in
    #[serde(default)]
    pub language: Option<String>,

    /// Total media duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    /// Full flattened transcript text
    #[serde(default)]
    pub text: Option<String>,

    /// Word-level timestamps, present when word granularity was requested
    #[serde(default)]
    pub words: Option<Vec<TranscriptWord>>,
}

impl Transcription {
    /// Parse a verbose JSON transcription response.
    pub fn from_json(content: &str) -> Result<Self, TranscriptError> {
        let transcription: Transcription = serde_json::from_str(content)?;
        Ok(transcription)
    }

    /// Take the word sequence, failing if the response was transcribed
    /// without word-level granularity.
    ///
    /// An empty word list is valid input (silent audio) and is returned
    /// as-is; only a missing `words` field is an error.
    pub fn into_words(self) -> Result<Vec<TranscriptWord>, TranscriptError> {
        self.words.ok_or(TranscriptError::MissingWords)
    }
}
