/*!
 * Tests for language utilities functionality
 */

use subit::language_utils::{
    get_language_name, is_supported_language, language_codes_match, validate_language_code,
    SUPPORTED_LANGUAGES,
};

/// Test that every code in the supported set validates
#[test]
fn test_validate_language_code_withSupportedCodes_shouldAccept() {
    for code in SUPPORTED_LANGUAGES {
        assert!(
            validate_language_code(code).is_ok(),
            "code {} should validate",
            code
        );
    }
}

/// Test normalization of case and whitespace during validation
#[test]
fn test_validate_language_code_withMixedCase_shouldNormalize() {
    assert_eq!(validate_language_code(" EN ").unwrap(), "en");
    assert_eq!(validate_language_code("Ja").unwrap(), "ja");
}

/// Test rejection of codes outside the supported set
#[test]
fn test_validate_language_code_withUnsupportedCodes_shouldReject() {
    // Valid ISO codes that the transcription collaborator does not accept
    assert!(validate_language_code("da").is_err());
    // Not ISO codes at all
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("english").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test the supported-language membership check
#[test]
fn test_is_supported_language_withVariousCodes_shouldMatchSet() {
    assert!(is_supported_language("en"));
    assert!(is_supported_language("VI"));
    assert!(!is_supported_language("da"));
}

/// Test language display names
#[test]
fn test_get_language_name_withValidCodes_shouldReturnNames() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert!(get_language_name("xx").is_err());
}

/// Test matching of 2-letter and 3-letter spellings
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("en", "en"));
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("FR", "fra"));
    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("en", "bogus"));
}
