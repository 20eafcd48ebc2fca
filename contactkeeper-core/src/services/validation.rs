//! Field validation for entered contact data

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::result::{Error, Result};
use crate::domain::ContactInfo;

/// Accepts local and international numbers, e.g. "0151 1234567" or "+49 151 1234567"
const PHONE_PATTERN: &str = r"^(?:\+|00)?(?:\d{2,3})?\s?\d{2,4}\s?\d{3,9}$";

const EMAIL_PATTERN: &str = r"^[^@\s<>()\[\],;:]+@[^@\s<>()\[\],;:]+$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Validation rules of the contact editor
///
/// The first name is required. Email and phone may be left blank, but
/// when given they must be well formed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactValidator;

impl ContactValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_first_name(&self, first_name: &str) -> std::result::Result<(), &'static str> {
        if first_name.trim().is_empty() {
            return Err("First name is required.");
        }
        Ok(())
    }

    pub fn validate_email(&self, email: &str) -> std::result::Result<(), &'static str> {
        let email = email.trim();
        if email.is_empty() || email_regex().is_match(email) {
            Ok(())
        } else {
            Err("Invalid email address.")
        }
    }

    pub fn validate_phone(&self, phone: &str) -> std::result::Result<(), &'static str> {
        if phone.trim().is_empty() || phone_regex().is_match(phone) {
            Ok(())
        } else {
            Err("Invalid phone number.")
        }
    }

    /// Check every rule and report all failures together
    pub fn validate(&self, info: &ContactInfo) -> Result<()> {
        let problems: Vec<&str> = [
            self.validate_first_name(info.first_name.as_deref().unwrap_or_default()),
            self.validate_email(info.email.as_deref().unwrap_or_default()),
            self.validate_phone(info.phone.as_deref().unwrap_or_default()),
        ]
        .into_iter()
        .filter_map(|check| check.err())
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(problems.join(" ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_required() {
        let v = ContactValidator::new();
        assert!(v.validate_first_name("Alice").is_ok());
        assert_eq!(v.validate_first_name("  "), Err("First name is required."));
    }

    #[test]
    fn test_email_rules() {
        let v = ContactValidator::new();
        assert!(v.validate_email("").is_ok());
        assert!(v.validate_email("alice@example.com").is_ok());
        assert!(v.validate_email("alice.smith@mail.example.org").is_ok());
        assert!(v.validate_email("alice").is_err());
        assert!(v.validate_email("alice@@example.com").is_err());
        assert!(v.validate_email("alice smith@example.com").is_err());
    }

    #[test]
    fn test_phone_rules() {
        let v = ContactValidator::new();
        assert!(v.validate_phone("").is_ok());
        assert!(v.validate_phone("0151 1234567").is_ok());
        assert!(v.validate_phone("+49 151 1234567").is_ok());
        assert!(v.validate_phone("004915112345678").is_ok());
        assert!(v.validate_phone("call me").is_err());
        assert!(v.validate_phone("12").is_err());
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let info = ContactInfo::new()
            .with_first_name("")
            .with_email("nope")
            .with_phone("abc");

        let err = ContactValidator::new().validate(&info).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("First name is required."));
        assert!(msg.contains("Invalid email address."));
        assert!(msg.contains("Invalid phone number."));
    }

    #[test]
    fn test_validate_accepts_complete_contact() {
        let info = ContactInfo::new()
            .with_first_name("Alice")
            .with_last_name("Smith")
            .with_email("alice@x.com")
            .with_phone("0151 1234567");
        assert!(ContactValidator::new().validate(&info).is_ok());
    }
}
