//! Contact service - the session's authoritative contact list
//!
//! The list is loaded lazily from the repository and then kept in memory.
//! Every mutation writes the complete list back. If that write fails, the
//! in-memory change is undone before the error is returned, so memory and
//! disk either both reflect a change or neither does.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, MutexGuard};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Contact, ContactInfo};
use crate::ports::ContactRepository;

/// Buffered change notifications per subscriber before it starts lagging
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Sent to subscribers after every successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactsChanged;

#[derive(Default)]
struct ContactCache {
    contacts: Vec<Contact>,
    loaded: bool,
}

/// Contact service for managing the contact collection
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    cache: Mutex<ContactCache>,
    changed: broadcast::Sender<ContactsChanged>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        let (changed, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            repository,
            cache: Mutex::new(ContactCache::default()),
            changed,
        }
    }

    /// Receive a `ContactsChanged` after each successful add, update or delete
    pub fn subscribe(&self) -> broadcast::Receiver<ContactsChanged> {
        self.changed.subscribe()
    }

    /// Lock the cache, loading it from the repository on first use
    ///
    /// A failed load leaves the cache unloaded so the next call retries.
    async fn loaded(&self) -> Result<MutexGuard<'_, ContactCache>> {
        let mut cache = self.cache.lock().await;
        if !cache.loaded {
            info!("loading contacts from repository");
            let contacts = self.repository.get_contacts().await.map_err(|e| {
                error!(error = %e, "failed to get contacts");
                e
            })?;
            cache.contacts = contacts;
            cache.loaded = true;
        }
        Ok(cache)
    }

    fn notify(&self) {
        // No subscribers is not an error
        let _ = self.changed.send(ContactsChanged);
    }

    /// Get all contacts
    pub async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let cache = self.loaded().await?;
        Ok(cache.contacts.clone())
    }

    /// Get a contact by id
    pub async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>> {
        info!(contact_id = %id, "getting contact");
        let cache = self.loaded().await?;

        let found = cache.contacts.iter().find(|c| c.id() == id).cloned();
        if found.is_none() {
            warn!(contact_id = %id, "contact not found");
        }
        Ok(found)
    }

    /// Find all contacts matching the present fields of `info`
    pub async fn find_contacts(&self, info: &ContactInfo) -> Result<Vec<Contact>> {
        info!("finding contacts");
        let cache = self.loaded().await?;

        Ok(cache
            .contacts
            .iter()
            .filter(|c| info.is_match(c))
            .cloned()
            .collect())
    }

    /// Add a new contact built from a fully populated `info`
    pub async fn add_contact(&self, info: &ContactInfo) -> Result<Contact> {
        info!("adding new contact");
        let new_contact = info.to_contact()?;

        let mut cache = self.loaded().await?;
        cache.contacts.push(new_contact.clone());

        if let Err(e) = self.repository.save_contacts(&cache.contacts).await {
            cache.contacts.retain(|c| c.id() != new_contact.id());
            error!(error = %e, "failed to add new contact");
            return Err(e);
        }
        drop(cache);

        self.notify();
        info!(contact_id = %new_contact.id(), "new contact added");
        Ok(new_contact)
    }

    /// Overwrite the present fields of `info` onto the contact with `id`
    ///
    /// Returns `Ok(None)` when no such contact exists.
    pub async fn update_contact(&self, id: Uuid, info: &ContactInfo) -> Result<Option<Contact>> {
        info!(contact_id = %id, "updating contact");
        let mut cache = self.loaded().await?;

        let Some(index) = cache.contacts.iter().position(|c| c.id() == id) else {
            warn!(contact_id = %id, "contact not found");
            return Ok(None);
        };

        let backup = cache.contacts[index].clone();
        info.overwrite_onto(&mut cache.contacts[index]);

        if let Err(e) = self.repository.save_contacts(&cache.contacts).await {
            cache.contacts[index] = backup;
            error!(contact_id = %id, error = %e, "failed to update contact");
            return Err(e);
        }
        let updated = cache.contacts[index].clone();
        drop(cache);

        self.notify();
        info!(contact_id = %id, "contact updated");
        Ok(Some(updated))
    }

    /// Delete the contact with `id`
    ///
    /// Returns the deleted id, or `Ok(None)` when no such contact exists.
    pub async fn delete_contact(&self, id: Uuid) -> Result<Option<Uuid>> {
        info!(contact_id = %id, "deleting contact");
        let mut cache = self.loaded().await?;

        let Some(index) = cache.contacts.iter().position(|c| c.id() == id) else {
            warn!(contact_id = %id, "contact not found");
            return Ok(None);
        };

        let removed = cache.contacts.remove(index);

        if let Err(e) = self.repository.save_contacts(&cache.contacts).await {
            cache.contacts.insert(index, removed);
            error!(contact_id = %id, error = %e, "failed to delete contact");
            return Err(e);
        }
        drop(cache);

        self.notify();
        info!(contact_id = %id, "contact deleted");
        Ok(Some(id))
    }
}
