/*!
 * Tests for sentence segmentation functionality
 */

use subit::segmenter::{Segmenter, SplitPolicy};
use subit::transcript::TranscriptWord;
use crate::common;

fn policy(max_words: usize, max_duration_secs: f64, split_chars: &str) -> SplitPolicy {
    SplitPolicy {
        max_words,
        max_duration_secs,
        split_chars: split_chars.chars().collect(),
        time_offset_secs: 0.0,
    }
}

/// Test that every word lands in exactly one sentence, in order
#[test]
fn test_segment_withArbitraryWords_shouldConserveWordsAndOrder() {
    let words = common::evenly_spaced_words(
        &["one", "two.", "three", "four", "five", "six!", "seven"],
        0.5,
    );
    let segmenter = Segmenter::new(policy(3, 10.0, ".!?"));

    let sentences = segmenter.segment(&words);

    let total_words: usize = sentences
        .iter()
        .map(|s| s.text.split(' ').count())
        .sum();
    assert_eq!(total_words, words.len());

    let rejoined = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let original = words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(rejoined, original);
}

/// Test that sentence times come from the first and last word
#[test]
fn test_segment_withGroupedWords_shouldTakeTimesFromBoundaryWords() {
    let words = vec![
        TranscriptWord::new("Hello", 0.25, 0.7),
        TranscriptWord::new("there", 0.8, 1.3),
        TranscriptWord::new("friend.", 1.4, 2.05),
    ];
    let segmenter = Segmenter::new(policy(10, 10.0, "."));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].start_secs, 0.25);
    assert_eq!(sentences[0].end_secs, 2.05);
    assert_eq!(sentences[0].text, "Hello there friend.");
}

/// Test the forced split on a trailing split character
#[test]
fn test_segment_withTrailingSplitChar_shouldCloseSentence() {
    let words = vec![
        TranscriptWord::new("Hello", 0.0, 0.4),
        TranscriptWord::new("world.", 0.4, 0.9),
    ];
    let segmenter = Segmenter::new(policy(5, 5.0, "."));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "Hello world.");
    assert_eq!(sentences[0].start_secs, 0.0);
    assert_eq!(sentences[0].end_secs, 0.9);
}

/// Test that a max word count of one forces one sentence per word
#[test]
fn test_segment_withMaxWordsOne_shouldEmitOneSentencePerWord() {
    let words = common::evenly_spaced_words(&["a", "b.", "c", "d?"], 0.3);
    let segmenter = Segmenter::new(policy(1, 20.0, ".?"));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), words.len());
    for (sentence, word) in sentences.iter().zip(words.iter()) {
        assert_eq!(sentence.text, word.word);
        assert_eq!(sentence.start_secs, word.start);
        assert_eq!(sentence.end_secs, word.end);
    }
}

/// Test length-limit grouping with forced splits disabled
#[test]
fn test_segment_withEmptySplitChars_shouldGroupExactRuns() {
    // 6 words of one second each; length limit 5, time limit far away
    let words = common::evenly_spaced_words(&["w1", "w2", "w3", "w4", "w5", "w6"], 1.0);
    let segmenter = Segmenter::new(policy(5, 20.0, ""));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "w1 w2 w3 w4 w5");
    assert_eq!(sentences[1].text, "w6");
    assert_eq!(sentences[1].start_secs, 5.0);
    assert_eq!(sentences[1].end_secs, 6.0);
}

/// Test the duration trigger closing sentences at word boundaries
#[test]
fn test_segment_withDurationLimit_shouldCloseAtWordBoundaries() {
    let words = common::evenly_spaced_words(&["w1", "w2", "w3", "w4", "w5"], 1.0);
    let segmenter = Segmenter::new(policy(20, 2.0, ""));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0].text, "w1 w2");
    assert_eq!(sentences[1].text, "w3 w4");
    assert_eq!(sentences[2].text, "w5");
}

/// Test that a single word longer than the duration limit still forms a sentence
#[test]
fn test_segment_withOverlongSingleWord_shouldFormOneWordSentence() {
    let words = vec![TranscriptWord::new("Hmmmmm", 0.0, 12.5)];
    let segmenter = Segmenter::new(policy(5, 5.0, ""));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "Hmmmmm");
    assert_eq!(sentences[0].duration_secs(), 12.5);
}

/// Test that an empty word sequence yields no sentences
#[test]
fn test_segment_withEmptyInput_shouldReturnNoSentences() {
    let segmenter = Segmenter::new(policy(5, 5.0, ".!?"));
    let sentences = segmenter.segment(&[]);
    assert!(sentences.is_empty());
}

/// Test that leftover words are flushed when the stream ends
#[test]
fn test_segment_withNoFinalTrigger_shouldFlushPendingWords() {
    let words = common::evenly_spaced_words(&["never", "closed"], 0.4);
    let segmenter = Segmenter::new(policy(10, 60.0, "."));

    let sentences = segmenter.segment(&words);

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "never closed");
}

/// Test that identical inputs always produce identical outputs
#[test]
fn test_segment_withSameInputTwice_shouldBeDeterministic() {
    let words = common::evenly_spaced_words(
        &["the", "quick", "brown.", "fox", "jumps", "over!", "lazy", "dogs"],
        0.7,
    );
    let segmenter = Segmenter::new(policy(3, 4.0, ".!"));

    let first = segmenter.segment(&words);
    let second = segmenter.segment(&words);

    assert_eq!(first, second);
}
