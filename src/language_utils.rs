use anyhow::{Result, anyhow};
use isolang::Language;

use crate::errors::ConfigError;

/// Language utilities for the transcription language option
///
/// The speech-to-text collaborator accepts a fixed set of ISO 639-1 codes.
/// This module validates a requested code against that set and resolves
/// display names for logging.
/// Codes the transcription collaborator supports, ISO 639-1.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "zh", "de", "es", "ru", "ko", "fr", "ja", "pt", "tr", "pl", "ca", "nl", "ar", "sv",
    "it", "id", "hi", "fi", "vi",
];

/// Check whether a language code is in the supported transcription set.
pub fn is_supported_language(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES.contains(&normalized.as_str())
}

/// Validate a language code against the supported set, returning the
/// normalized (trimmed, lowercased) code.
pub fn validate_language_code(code: &str) -> Result<String, ConfigError> {
    let normalized = code.trim().to_lowercase();
    if SUPPORTED_LANGUAGES.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ConfigError::UnsupportedLanguage(code.to_string()))
    }
}

/// Get the English display name for a language code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    if let Some(lang) = Language::from_639_1(&normalized) {
        return Ok(lang.to_name().to_string());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes refer to the same language
///
/// Handles 2-letter vs 3-letter spellings of the same language so that a
/// collaborator echoing "eng" still matches a configured "en".
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let norm1 = code1.trim().to_lowercase();
    let norm2 = code2.trim().to_lowercase();

    if norm1 == norm2 {
        return true;
    }

    let lang1 = parse_language(&norm1);
    let lang2 = parse_language(&norm2);

    match (lang1, lang2) {
        (Some(l1), Some(l2)) => l1 == l2,
        _ => false,
    }
}

fn parse_language(code: &str) -> Option<Language> {
    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code),
        _ => None,
    }
}
