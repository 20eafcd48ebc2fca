//! Local disk implementation of the FileSystem port

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::ports::FileSystem;

/// FileSystem backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn dir_exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let fs = LocalFileSystem::new();

        assert!(!fs.exists(&path).await);
        fs.write(&path, b"[]").await.unwrap();
        assert!(fs.exists(&path).await);
        assert_eq!(fs.read(&path).await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_exists_is_false_for_directories() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::new();

        assert!(!fs.exists(temp_dir.path()).await);
        assert!(fs.dir_exists(temp_dir.path()).await);
    }
}
