use std::fmt;
use log::debug;

use crate::app_config::{Config, SubtitleFormat, TimestampPrecision};
use crate::errors::ConfigError;
use crate::segmenter::{Segmenter, Sentence};
use crate::transcript::TranscriptWord;

// @module: Cue serialization and the conversion pipeline

/// Filename prefix carried by every generated subtitle file.
const OUTPUT_PREFIX: &str = "subit_";

// @struct: Single numbered subtitle cue
#[derive(Debug, Clone)]
pub struct Cue {
    // @field: Sequence number, 1-based and gapless
    pub seq_num: usize,

    // @field: Start time in ms, offset applied and clamped
    pub start_time_ms: u64,

    // @field: End time in ms, offset applied and clamped
    pub end_time_ms: u64,

    // @field: Cue text
    pub text: String,
}

impl Cue {
    /// Creates a new cue - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        Cue {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Build a cue from a sentence, applying the configured time offset.
    pub fn from_sentence(
        seq_num: usize,
        sentence: &Sentence,
        offset_secs: f64,
        precision: TimestampPrecision,
    ) -> Self {
        Cue {
            seq_num,
            start_time_ms: precision.apply(offset_to_ms(sentence.start_secs, offset_secs)),
            end_time_ms: precision.apply(offset_to_ms(sentence.end_secs, offset_secs)),
            text: sentence.text.clone(),
        }
    }

    /// Convert start time to a formatted clock string
    pub fn format_start_time(&self) -> String {
        format_timestamp(self.start_time_ms)
    }

    /// Convert end time to a formatted clock string
    pub fn format_end_time(&self) -> String {
        format_timestamp(self.end_time_ms)
    }

    /// Render one cue block with the given millisecond separator.
    fn write_block(&self, out: &mut String, millis_separator: char) {
        use std::fmt::Write;

        // Infallible for String targets
        let _ = writeln!(out, "{}", self.seq_num);
        let _ = writeln!(
            out,
            "{} --> {}",
            format_timestamp_with(self.start_time_ms, millis_separator),
            format_timestamp_with(self.end_time_ms, millis_separator)
        );
        let _ = writeln!(out, "{}", self.text);
        let _ = writeln!(out);
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Shift a second-based timestamp by a signed offset and convert to
/// milliseconds.
///
/// Negative results clamp to zero; the cue clock format cannot represent
/// times before the start of the media. This is the only place a value is
/// ever clamped; configuration ranges are validated, not clamped.
pub fn offset_to_ms(time_secs: f64, offset_secs: f64) -> u64 {
    let total_ms = ((time_secs + offset_secs) * 1000.0).round();
    if total_ms < 0.0 {
        0
    } else {
        total_ms as u64
    }
}

/// Format a millisecond timestamp as a clock string (HH:MM:SS,mmm).
///
/// Hours are not capped at 24; they simply grow past two digits.
pub fn format_timestamp(ms: u64) -> String {
    format_timestamp_with(ms, ',')
}

fn format_timestamp_with(ms: u64, millis_separator: char) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, seconds, millis_separator, millis
    )
}

/// Number sentences into cues, applying the time offset to every timestamp.
///
/// Sequence numbers are purely positional: 1..N in input order, no gaps.
pub fn cues_from_sentences(
    sentences: &[Sentence],
    offset_secs: f64,
    precision: TimestampPrecision,
) -> Vec<Cue> {
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| Cue::from_sentence(i + 1, sentence, offset_secs, precision))
        .collect()
}

/// Render cues into a subtitle document in the chosen container format.
///
/// SRT is the bare cue-block sequence with comma millisecond separators.
/// WebVTT carries its signature line and uses dot separators; the signature
/// is present even for an empty cue list, since a VTT file without it is
/// invalid. An empty SRT document is the empty string.
pub fn render_document(cues: &[Cue], format: SubtitleFormat) -> String {
    let mut out = String::new();

    match format {
        SubtitleFormat::Srt => {
            for cue in cues {
                cue.write_block(&mut out, ',');
            }
        }
        SubtitleFormat::Vtt => {
            out.push_str("WEBVTT\n\n");
            for cue in cues {
                cue.write_block(&mut out, '.');
            }
        }
    }

    out
}

/// Derive the suggested output filename from the source media filename.
///
/// The stem is everything before the first dot, the extension follows the
/// chosen container format, and the `subit_` prefix marks generated files.
pub fn suggested_filename(source_filename: &str, format: SubtitleFormat) -> String {
    let stem = source_filename
        .split('.')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("subtitles");

    format!("{}{}.{}", OUTPUT_PREFIX, stem, format.extension())
}

/// Result of one conversion: the document text plus a suggested filename.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleOutput {
    /// The rendered subtitle document
    pub content: String,

    /// Filename the caller should save the document under
    pub suggested_filename: String,
}

/// Converts a word-level transcript into a subtitle document.
///
/// This is the composition point: validate the configuration, segment the
/// words, serialize the sentences. A builder is a pure function of its
/// inputs; no state survives a `build` call, and independent builds may
/// run concurrently.
pub struct SubtitleBuilder {
    config: Config,
}

impl SubtitleBuilder {
    pub fn new(config: Config) -> Self {
        SubtitleBuilder { config }
    }

    /// Convert a word sequence into a subtitle document.
    ///
    /// The configuration is validated up front; an out-of-domain value
    /// fails the whole call with nothing partially emitted. An empty word
    /// sequence is not an error and yields an empty document.
    pub fn build(
        &self,
        words: &[TranscriptWord],
        source_filename: &str,
    ) -> Result<SubtitleOutput, ConfigError> {
        self.config.validate()?;

        let segmenter = Segmenter::new(self.config.split_policy());
        let sentences = segmenter.segment(words);
        debug!(
            "Segmented {} words into {} sentences",
            words.len(),
            sentences.len()
        );

        let cues = cues_from_sentences(
            &sentences,
            self.config.time_offset,
            self.config.timestamp_precision,
        );

        Ok(SubtitleOutput {
            content: render_document(&cues, self.config.format),
            suggested_filename: suggested_filename(source_filename, self.config.format),
        })
    }
}
