//! Utilities for extracting the JSON object from a model response.
//!
//! Model responses often wrap the requested JSON in markdown code fences or
//! surround it with explanatory prose, despite instructions not to. These
//! helpers peel those layers off without touching the interior content.

use backpage_error::{StoryError, StoryErrorKind};

/// Strip surrounding markdown code fences, if present.
///
/// Handles ```` ```json ```` and bare ```` ``` ```` fences with an optional
/// language tag on the opening line. Text without fences passes through
/// trimmed but otherwise unchanged.
pub(crate) fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the optional language tag: everything up to the first newline.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Slice out the JSON object between the first `{` and the last `}`.
///
/// This tolerates preamble ("Here is the JSON:") and postamble ("Hope this
/// helps!") the model may add.
///
/// # Errors
///
/// Returns a malformed-output error when no brace pair exists.
pub(crate) fn extract_object(text: &str) -> Result<&str, StoryError> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(StoryError::new(StoryErrorKind::MalformedOutput(format!(
            "no JSON object found in response (length: {})",
            text.len()
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_clean_text_through() {
        assert_eq!(strip_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn extracts_object_between_braces() {
        let text = "Here you go:\n{\"a\": 1}\nHope this helps!";
        assert_eq!(extract_object(text).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn no_braces_is_malformed() {
        assert!(extract_object("just plain text").is_err());
        assert!(extract_object("} backwards {").is_err());
    }
}
