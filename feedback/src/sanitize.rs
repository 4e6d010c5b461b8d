//! Cleanup of model output into a single plain paragraph.
//!
//! The model is asked not to use markdown, but that is a request, not a
//! guarantee. This pass removes emphasis markers, flattens whitespace and caps
//! the length. It is cosmetic: unbalanced markers are left as they are.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default maximum number of characters kept before truncation.
pub const DEFAULT_MAX_CHARS: usize = 1500;

/// Appended when the text is truncated.
pub const ELLIPSIS: &str = "...";

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STAR_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static UNDERSCORE_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips markdown emphasis, collapses whitespace, trims, and truncates to
/// `max_chars` characters (plus [`ELLIPSIS`]).
///
/// Each substitution is a single left-to-right pass, so `**a**` loses both
/// markers but the enclosed text is never rewritten.
///
/// ```
/// use feedback::sanitize::clean_feedback;
///
/// assert_eq!(clean_feedback("This **word** is _emphasized_", 1500), "This word is emphasized");
/// ```
pub fn clean_feedback(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = BOLD.replace_all(text, "$1");
    let cleaned = STAR_EMPHASIS.replace_all(&cleaned, "$1");
    let cleaned = UNDERSCORE_EMPHASIS.replace_all(&cleaned, "$1");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    match cleaned.char_indices().nth(max_chars) {
        // Byte offset of the first character past the limit.
        Some((cut, _)) => format!("{}{}", cleaned[..cut].trim_end(), ELLIPSIS),
        None => cleaned.to_string(),
    }
}
