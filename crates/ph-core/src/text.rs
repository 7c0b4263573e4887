//! Free-text input rules for titles, names and role names.

use crate::error::{PlayhouseError, PlayhouseResult};

const PUNCTUATION: &[char] = &['.', ',', '!', '?', '(', ')', '-'];

/// Whether `text` contains only letters, digits, whitespace and `.,!?()-`.
///
/// The empty string is valid; use [`require_text`] for mandatory fields.
pub fn is_valid_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace() || PUNCTUATION.contains(&c))
}

/// Trim a mandatory field and check it is non-empty and well-formed.
pub fn require_text<'a>(field: &str, text: &'a str) -> PlayhouseResult<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PlayhouseError::Validation(format!("{field} is empty")));
    }
    if !is_valid_text(trimmed) {
        return Err(PlayhouseError::Validation(format!(
            "{field} contains unsupported characters: \"{trimmed}\""
        )));
    }
    Ok(trimmed)
}
