use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

// ============================================================================
// Email - shared value object
// ============================================================================

// local part, '@', domain labels, then a top-level label of 2+ letters
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Email address accepted by the conservative grammar above.
///
/// The raw input is kept as-is: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_round_trips() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email.to_string(), "user@example.com");
    }

    #[test]
    fn test_local_part_symbols_accepted() {
        for raw in ["first.last@example.co.jp", "a_b%c+d-e@sub-domain.example.org"] {
            assert!(Email::new(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for raw in ["foo", "foo@bar", "@bar.com", "", "user@example.c", "user@@example.com"] {
            let result = Email::new(raw);
            assert!(
                matches!(result, Err(ValidationError::InvalidEmail(ref input)) if input == raw),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_match_is_anchored() {
        assert!(Email::new(" user@example.com").is_err());
        assert!(Email::new("user@example.com ").is_err());
        assert!(Email::new("x user@example.com").is_err());
    }

    #[test]
    fn test_no_normalization() {
        let upper = Email::new("User@Example.com").unwrap();
        let lower = Email::new("user@example.com").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: Email = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(ok.as_str(), "user@example.com");

        let bad = serde_json::from_str::<Email>("\"not-an-email\"");
        assert!(bad.is_err());
    }
}
