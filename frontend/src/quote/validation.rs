use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::draft::QuoteDraft;

// `[^\s@]` with whitespace counted the way browsers do: U+0085 is an
// ordinary character, U+FEFF is whitespace.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^[\s--\x{85}]\x{FEFF}@]+@[^[\s--\x{85}]\x{FEFF}@]+\.[^[\s--\x{85}]\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Reasons a quote request is turned away before it leaves the page. The
/// `Display` text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Please fill in all required fields (Name and Email)")]
    MissingRequiredField,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required fields first, then the email shape. Stops at the first failure.
pub fn validate(draft: &QuoteDraft) -> Result<(), QuoteError> {
    if draft.full_name.is_empty() || draft.email.is_empty() {
        return Err(QuoteError::MissingRequiredField);
    }
    if !is_valid_email(&draft.email) {
        return Err(QuoteError::InvalidEmailFormat);
    }
    Ok(())
}
