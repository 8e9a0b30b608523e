use crate::transcript::TranscriptWord;

// @module: Sentence segmentation of word-level transcripts

/// Split policy for one segmentation pass.
///
/// Built from a validated [`crate::app_config::Config`]; the ranges have
/// already been checked by the time a policy exists, so the segmenter
/// itself performs no validation.
#[derive(Debug, Clone)]
pub struct SplitPolicy {
    // @field: Max words per sentence before a forced close
    pub max_words: usize,

    // @field: Max sentence duration in seconds before a forced close
    pub max_duration_secs: f64,

    // @field: Trailing characters that force a sentence close
    pub split_chars: Vec<char>,

    // @field: Signed shift applied to every cue timestamp, in seconds
    pub time_offset_secs: f64,
}

/// A maximal run of consecutive words grouped into one cue.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Words joined with single spaces, in original order
    pub text: String,

    /// Start of the first word, in seconds
    pub start_secs: f64,

    /// End of the last word, in seconds
    pub end_secs: f64,
}

impl Sentence {
    /// Duration of the sentence in seconds
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

/// Groups an ordered word sequence into sentences under a split policy.
pub struct Segmenter {
    policy: SplitPolicy,
}

/// Accumulator for the sentence currently being built.
///
/// `start_secs` stays unset until the first word of a new sentence arrives;
/// everything lives on the stack of one `segment` call, nothing outlives it.
#[derive(Default)]
struct PendingSentence {
    text: String,
    start_secs: Option<f64>,
    end_secs: f64,
    word_count: usize,
}

impl PendingSentence {
    fn push_word(&mut self, word: &TranscriptWord) {
        if self.start_secs.is_none() {
            self.start_secs = Some(word.start);
        }
        if self.word_count > 0 {
            self.text.push(' ');
        }
        self.text.push_str(&word.word);
        self.end_secs = word.end;
        self.word_count += 1;
    }

    /// Close the pending sentence and reset the accumulator.
    fn take(&mut self) -> Option<Sentence> {
        let start_secs = self.start_secs.take()?;
        let sentence = Sentence {
            text: std::mem::take(&mut self.text),
            start_secs,
            end_secs: self.end_secs,
        };
        self.word_count = 0;
        Some(sentence)
    }
}

impl Segmenter {
    pub fn new(policy: SplitPolicy) -> Self {
        Segmenter { policy }
    }

    /// Segment a word sequence into sentences.
    ///
    /// Every input word lands in exactly one output sentence, in original
    /// order. A sentence closes when, after including the current word,
    /// any of three triggers fires:
    ///
    /// - the word's final character is one of the configured split chars
    /// - the pending word count reached `max_words`
    /// - the pending duration reached `max_duration_secs`
    ///
    /// The triggering word is included in the sentence it closes; boundaries
    /// are always word-inclusive. Limits are only evaluated at word
    /// boundaries, so a single word longer than `max_duration_secs` still
    /// forms a valid one-word sentence. Whatever is pending when the stream
    /// ends is flushed as a final sentence, with no minimum size.
    pub fn segment(&self, words: &[TranscriptWord]) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut pending = PendingSentence::default();

        for word in words {
            pending.push_word(word);

            if self.should_close(&pending, word) {
                if let Some(sentence) = pending.take() {
                    sentences.push(sentence);
                }
            }
        }

        // Flush leftover words once the stream ends without a trigger.
        if let Some(sentence) = pending.take() {
            sentences.push(sentence);
        }

        sentences
    }

    /// Evaluate the three split triggers on the state after `word` was added.
    fn should_close(&self, pending: &PendingSentence, word: &TranscriptWord) -> bool {
        let forced = word
            .word
            .chars()
            .next_back()
            .is_some_and(|last| self.policy.split_chars.contains(&last));

        let start_secs = pending.start_secs.unwrap_or(word.start);

        forced
            || pending.word_count >= self.policy.max_words
            || pending.end_secs - start_secs >= self.policy.max_duration_secs
    }
}
