/*!
 * # Sub-it - word-level transcripts to subtitle cue files
 *
 * A Rust library for turning time-stamped, word-level transcripts into
 * subtitle cue documents.
 *
 * ## Features
 *
 * - Group timestamped words into sentence-sized cues under competing
 *   length, duration, and punctuation constraints
 * - Render numbered, clock-stamped cue blocks (SRT or WebVTT)
 * - Millisecond-precise timestamps with a signed global offset
 * - Configurable split policy with validated ranges
 * - Batch conversion of transcript files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `transcript`: Input model for the speech-to-text collaborator's output
 * - `segmenter`: Grouping words into sentences under a split policy
 * - `subtitle_builder`: Cue serialization and the conversion pipeline
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Supported transcription language codes
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod transcript;
pub mod segmenter;
pub mod subtitle_builder;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, SubtitleFormat, TimestampPrecision};
pub use transcript::{Transcription, TranscriptWord};
pub use segmenter::{Segmenter, Sentence, SplitPolicy};
pub use subtitle_builder::{Cue, SubtitleBuilder, SubtitleOutput};
pub use language_utils::{get_language_name, is_supported_language, language_codes_match};
pub use errors::{AppError, ConfigError, TranscriptError};
