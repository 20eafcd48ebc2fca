//! JSON file repository implementation
//!
//! The whole collection lives in one file as a JSON array and is replaced
//! on every save. Reads and writes are serialized by a lock owned by the
//! repository instance. There is no cross-process locking.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::{ContactRepository, FileSystem};

/// Contact repository stored in a single JSON file
pub struct JsonContactRepository {
    file_path: PathBuf,
    fs: Arc<dyn FileSystem>,
    lock: Mutex<()>,
}

impl JsonContactRepository {
    /// Create a repository for `file_path`
    ///
    /// The file is not touched until the first read or write.
    pub fn new(file_path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Result<Self> {
        let file_path = file_path.into();
        if file_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::invalid_argument(
                "contact file path cannot be empty or whitespace",
            ));
        }

        Ok(Self {
            file_path,
            fs,
            lock: Mutex::new(()),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn io_failure(&self, action: &'static str, err: std::io::Error) -> Error {
        let err = Error::from_io(&self.file_path, err);
        match &err {
            Error::AccessDenied { .. } => {
                error!(path = %self.file_path.display(), error = %err, "contact data file {} access denied", action)
            }
            _ => {
                error!(path = %self.file_path.display(), error = %err, "contact data file {} failed", action)
            }
        }
        err
    }
}

#[async_trait]
impl ContactRepository for JsonContactRepository {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        info!(path = %self.file_path.display(), "retrieving contacts");

        if !self.fs.exists(&self.file_path).await {
            warn!(path = %self.file_path.display(), "contact file not found, creating a new one");
            self.save_contacts(&[]).await?;
        }

        let _guard = self.lock.lock().await;

        let bytes = self
            .fs
            .read(&self.file_path)
            .await
            .map_err(|e| self.io_failure("read", e))?;

        if bytes.is_empty() {
            info!("contact file is empty");
            return Ok(Vec::new());
        }

        // A literal `null` document is treated as an empty collection
        let contacts: Option<Vec<Contact>> = serde_json::from_slice(&bytes).map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "contact data file is invalid");
            Error::corrupted("Contact data file is invalid.", e)
        })?;
        let contacts = contacts.unwrap_or_default();

        info!(count = contacts.len(), "retrieved contacts");
        Ok(contacts)
    }

    async fn save_contacts(&self, contacts: &[Contact]) -> Result<()> {
        info!(path = %self.file_path.display(), count = contacts.len(), "saving contacts");

        let _guard = self.lock.lock().await;

        let bytes = serde_json::to_vec_pretty(contacts).map_err(|e| {
            error!(error = %e, "failed to serialize contacts");
            Error::corrupted("Contact data could not be serialized.", e)
        })?;

        self.fs
            .write(&self.file_path, &bytes)
            .await
            .map_err(|e| self.io_failure("write", e))?;

        info!("saved contacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::adapters::local_fs::LocalFileSystem;

    fn repo_in(temp_dir: &TempDir) -> JsonContactRepository {
        JsonContactRepository::new(
            temp_dir.path().join("contacts.json"),
            Arc::new(LocalFileSystem::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_blank_path() {
        let result = JsonContactRepository::new("  ", Arc::new(LocalFileSystem::new()));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_created_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let contacts = repo.get_contacts().await.unwrap();

        assert!(contacts.is_empty());
        assert!(repo.file_path().exists());
        let on_disk: Vec<Contact> =
            serde_json::from_str(&std::fs::read_to_string(repo.file_path()).unwrap()).unwrap();
        assert!(on_disk.is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.file_path(), "").unwrap();

        assert!(repo.get_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_document_reads_as_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.file_path(), "null").unwrap();

        assert!(repo.get_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported_as_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.file_path(), "{ this is not a contact list").unwrap();

        let err = repo.get_contacts().await.unwrap_err();
        assert!(matches!(err, Error::RepositoryCorrupted { .. }));

        // The lock must have been released on the failure path
        repo.save_contacts(&[]).await.unwrap();
        assert!(repo.get_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reads_desktop_app_format() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(
            repo.file_path(),
            r#"[{"Id":"7d9f3c1e-2b4a-4f6e-9c8d-1a2b3c4d5e6f","FirstName":"Alice","LastName":"Smith","Email":"alice@x.com","Phone":"555-0001"}]"#,
        )
        .unwrap();

        let contacts = repo.get_contacts().await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(
            contacts[0].id().to_string(),
            "7d9f3c1e-2b4a-4f6e-9c8d-1a2b3c4d5e6f"
        );
        assert_eq!(contacts[0].first_name, "Alice");
    }
}
