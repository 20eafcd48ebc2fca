//! Partial contact descriptor used for searching, adding and updating

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::Contact;

/// A bag of optional contact fields
///
/// A field counts as present when it is `Some` and not blank. Absent fields
/// act as wildcards when matching and are left untouched when overwriting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl ContactInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor matching on first and last name only
    pub fn full_name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::new()
            .with_first_name(first_name)
            .with_last_name(last_name)
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Fully populated snapshot of an existing contact
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            email: Some(contact.email.clone()),
            phone: Some(contact.phone.clone()),
        }
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        present(&self.first_name).is_none()
            && present(&self.last_name).is_none()
            && present(&self.email).is_none()
            && present(&self.phone).is_none()
    }

    /// Build a new contact with a fresh id; every field must be present
    pub fn to_contact(&self) -> Result<Contact> {
        let first_name = present(&self.first_name)
            .ok_or_else(|| Error::validation("First name cannot be empty."))?;
        let last_name = present(&self.last_name)
            .ok_or_else(|| Error::validation("Last name cannot be empty."))?;
        let phone = present(&self.phone)
            .ok_or_else(|| Error::validation("Phone number cannot be empty."))?;
        let email = present(&self.email)
            .ok_or_else(|| Error::validation("Email address cannot be empty."))?;

        Ok(Contact::new(first_name, last_name, email, phone))
    }

    /// Copy the present fields onto `contact`
    pub fn overwrite_onto(&self, contact: &mut Contact) {
        if let Some(value) = present(&self.first_name) {
            contact.first_name = value.to_string();
        }
        if let Some(value) = present(&self.last_name) {
            contact.last_name = value.to_string();
        }
        if let Some(value) = present(&self.email) {
            contact.email = value.to_string();
        }
        if let Some(value) = present(&self.phone) {
            contact.phone = value.to_string();
        }
    }

    /// Case-insensitive match on the present fields
    pub fn is_match(&self, contact: &Contact) -> bool {
        let field_matches = |field: &Option<String>, actual: &str| {
            present(field).map_or(true, |wanted| eq_ignore_case(wanted, actual))
        };

        field_matches(&self.first_name, &contact.first_name)
            && field_matches(&self.last_name, &contact.last_name)
            && field_matches(&self.email, &contact.email)
            && field_matches(&self.phone, &contact.phone)
    }
}
