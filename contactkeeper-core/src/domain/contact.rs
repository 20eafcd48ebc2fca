//! Contact domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact
///
/// The id is assigned once and has no setter. Keys are PascalCase so data
/// files written by the desktop application load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Create a contact with a freshly generated id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), first_name, last_name, email, phone)
    }

    /// Create a contact with a known id
    pub fn with_id(
        id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Case-insensitive comparison of both names, blank names included
    pub fn has_full_name(&self, first_name: &str, last_name: &str) -> bool {
        let same = |a: &str, b: &str| a.trim().to_lowercase() == b.trim().to_lowercase();
        same(&self.first_name, first_name) && same(&self.last_name, last_name)
    }
}
