//! Input validation utilities.
//!
//! This module contains functions for validating configuration and request inputs before they
//! are echoed back to callers or used to select catalog data.

use crate::{CatalogError, CatalogResult};

/// Validates that a language tag is a plausible BCP 47 tag (for example `en` or `hi-IN`).
///
/// The tag is echoed back in API responses, so this applies conservative guardrails:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Restricts characters to ASCII alphanumerics and `-`
///
/// # Errors
///
/// Returns a `CatalogError::InvalidInput` if the tag is invalid.
pub fn validate_language_tag(tag: &str) -> CatalogResult<()> {
    const MAX_TAG_LEN: usize = 35;

    if tag.trim().is_empty() {
        return Err(CatalogError::InvalidInput(
            "language tag cannot be empty".into(),
        ));
    }

    if tag.len() > MAX_TAG_LEN {
        return Err(CatalogError::InvalidInput(format!(
            "language tag exceeds maximum length of {} characters",
            MAX_TAG_LEN
        )));
    }

    let ok = tag.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
    if !ok || tag.starts_with('-') || tag.ends_with('-') {
        return Err(CatalogError::InvalidInput(
            "language tag contains invalid characters (only alphanumeric and '-' allowed)".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_and_regional_tags() {
        validate_language_tag("en").expect("en is valid");
        validate_language_tag("hi-IN").expect("hi-IN is valid");
    }

    #[test]
    fn rejects_blank_tag() {
        assert!(matches!(
            validate_language_tag("  "),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_unsafe_characters() {
        assert!(validate_language_tag("en<script>").is_err());
        assert!(validate_language_tag("-en").is_err());
        assert!(validate_language_tag("en_GB").is_err());
    }

    #[test]
    fn rejects_overlong_tag() {
        let tag = "a".repeat(36);
        assert!(validate_language_tag(&tag).is_err());
    }
}
