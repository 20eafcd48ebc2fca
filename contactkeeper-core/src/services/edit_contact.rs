//! Edit contact manager - save flow of the contact editor
//!
//! Detects full-name duplicates and resolves them by merging the entered
//! data into the contact that already carries that name.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Contact, ContactInfo};
use crate::services::ContactService;

/// What `save_contact` ended up doing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// A new contact was created
    Added { contact: Contact },
    /// The edited contact was updated in place
    Updated { contact: Contact },
    /// The data was merged into an existing contact with the same full name
    Merged { into: Uuid },
    /// The user declined to overwrite the duplicate
    Cancelled,
    /// The contact being edited no longer exists
    NotFound { id: Uuid },
}

/// Orchestrates add/update/delete for the contact editor
pub struct EditContactManager {
    contact_service: Arc<ContactService>,
}

impl EditContactManager {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self { contact_service }
    }

    /// Find the one contact named `first_name last_name`
    ///
    /// `None` for either name is an argument error. A blank first name means
    /// nothing to search for. More than one match means the store already
    /// violates full-name uniqueness and nothing can be saved.
    pub async fn find_full_name_duplicate(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Option<Uuid>> {
        let first_name =
            first_name.ok_or_else(|| Error::invalid_argument("first name is required"))?;
        let last_name =
            last_name.ok_or_else(|| Error::invalid_argument("last name is required"))?;

        info!(first_name, last_name, "searching for duplicate contact");

        if first_name.trim().is_empty() {
            error!("empty first name provided to duplicate search");
            return Ok(None);
        }

        // A blank last name is a wildcard for find_contacts, so narrow to exact names
        let query = ContactInfo::full_name(first_name, last_name);
        let duplicates: Vec<Contact> = self
            .contact_service
            .find_contacts(&query)
            .await?
            .into_iter()
            .filter(|c| c.has_full_name(first_name, last_name))
            .collect();

        match duplicates.as_slice() {
            [] => Ok(None),
            [duplicate] => Ok(Some(duplicate.id())),
            _ => {
                let ids: Vec<String> = duplicates.iter().map(|c| c.id().to_string()).collect();
                error!(ids = %ids.join(", "), "found multiple contacts with the same name");
                Err(Error::data_integrity(
                    "multiple contacts share the same full name - cannot save any changes",
                ))
            }
        }
    }

    /// Merge `info` into the duplicate, removing the contact being edited
    pub async fn handle_duplicate_contact(
        &self,
        duplicate_id: Uuid,
        info: &ContactInfo,
        editing: Option<&Contact>,
    ) -> Result<()> {
        info!(
            duplicate_id = %duplicate_id,
            editing_id = ?editing.map(Contact::id),
            "handling duplicate contact"
        );

        if let Some(contact) = editing {
            self.contact_service.delete_contact(contact.id()).await?;
        }

        self.contact_service.update_contact(duplicate_id, info).await?;
        Ok(())
    }

    pub async fn add_contact(&self, info: &ContactInfo) -> Result<Contact> {
        self.contact_service.add_contact(info).await
    }

    pub async fn update_contact(&self, id: Uuid, info: &ContactInfo) -> Result<Option<Contact>> {
        self.contact_service.update_contact(id, info).await
    }

    /// True when creating a new contact or when `info` differs from `compare_to`
    pub fn check_for_unsaved_changes(&self, info: &ContactInfo, compare_to: Option<&Contact>) -> bool {
        compare_to.map_or(true, |contact| !info.is_match(contact))
    }

    /// Save what was entered in the editor
    ///
    /// `editing` is the contact being edited, or `None` when creating one.
    /// When another contact already has the entered full name,
    /// `confirm_overwrite` is asked whether to merge into it; its error
    /// aborts the save.
    pub async fn save_contact<F>(
        &self,
        info: &ContactInfo,
        editing: Option<&Contact>,
        confirm_overwrite: F,
    ) -> Result<SaveOutcome>
    where
        F: FnOnce(&Contact) -> Result<bool>,
    {
        let duplicate_id = self
            .find_full_name_duplicate(
                Some(info.first_name.as_deref().unwrap_or_default()),
                Some(info.last_name.as_deref().unwrap_or_default()),
            )
            .await?;

        let editing_id = editing.map(Contact::id);

        if let Some(duplicate_id) = duplicate_id.filter(|id| Some(*id) != editing_id) {
            let Some(duplicate) = self.contact_service.get_contact(duplicate_id).await? else {
                return Err(Error::data_integrity(format!(
                    "duplicate contact {duplicate_id} disappeared during save"
                )));
            };

            if !confirm_overwrite(&duplicate)? {
                info!(duplicate_id = %duplicate_id, "overwrite of duplicate declined");
                return Ok(SaveOutcome::Cancelled);
            }

            self.handle_duplicate_contact(duplicate_id, info, editing)
                .await?;
            return Ok(SaveOutcome::Merged { into: duplicate_id });
        }

        match editing {
            Some(contact) => match self.update_contact(contact.id(), info).await? {
                Some(updated) => Ok(SaveOutcome::Updated { contact: updated }),
                None => Ok(SaveOutcome::NotFound { id: contact.id() }),
            },
            None => {
                let contact = self.add_contact(info).await?;
                Ok(SaveOutcome::Added { contact })
            }
        }
    }
}
