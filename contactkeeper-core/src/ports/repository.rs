//! Repository port - contact storage abstraction

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::Contact;

/// Whole-collection contact storage
///
/// Implementations read and replace the complete collection; there is no
/// incremental update.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Load every stored contact
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Replace the stored collection with `contacts`
    async fn save_contacts(&self, contacts: &[Contact]) -> Result<()>;
}
