//! Application data directory setup

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::result::{Error, Result};
use crate::ports::FileSystem;

/// Default name of the contact data file
pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Makes sure the data directory exists and resolves the data file path
pub struct AppDataInitializer {
    fs: Arc<dyn FileSystem>,
}

impl AppDataInitializer {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Create `base_dir` if needed and return `base_dir/file_name`
    pub async fn initialize(&self, base_dir: &Path, file_name: &str) -> Result<PathBuf> {
        if base_dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::invalid_argument(
                "data directory cannot be empty or whitespace",
            ));
        }
        if file_name.trim().is_empty() {
            return Err(Error::invalid_argument("data file name cannot be empty"));
        }

        self.ensure_directory_exists(base_dir).await?;
        Ok(base_dir.join(file_name))
    }

    async fn ensure_directory_exists(&self, dir: &Path) -> Result<()> {
        if self.fs.dir_exists(dir).await {
            return Ok(());
        }

        info!(path = %dir.display(), "data directory does not exist, creating it");
        self.fs.create_dir_all(dir).await.map_err(|e| {
            let err = Error::from_io(dir, e);
            error!(path = %dir.display(), error = %err, "failed to create data directory");
            err
        })?;
        info!(path = %dir.display(), "data directory created");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::adapters::local_fs::LocalFileSystem;

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("ContactKeeper");
        let initializer = AppDataInitializer::new(Arc::new(LocalFileSystem::new()));

        let path = initializer.initialize(&base, DEFAULT_DATA_FILE).await.unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("contacts.json"));
    }

    #[tokio::test]
    async fn test_existing_directory_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("keep.txt"), "x").unwrap();
        let initializer = AppDataInitializer::new(Arc::new(LocalFileSystem::new()));

        let path = initializer
            .initialize(temp_dir.path(), "people.json")
            .await
            .unwrap();

        assert_eq!(path, temp_dir.path().join("people.json"));
        assert!(temp_dir.path().join("keep.txt").exists());
    }

    #[tokio::test]
    async fn test_blank_directory_is_rejected() {
        let initializer = AppDataInitializer::new(Arc::new(LocalFileSystem::new()));
        let result = initializer.initialize(Path::new(" "), DEFAULT_DATA_FILE).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
