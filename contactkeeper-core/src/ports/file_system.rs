//! File system port
//!
//! The JSON repository and the data directory initializer only touch the
//! disk through this trait so tests can swap in an in-memory double.

use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether a file exists at `path`
    async fn exists(&self, path: &Path) -> bool;

    /// Whether a directory exists at `path`
    async fn dir_exists(&self, path: &Path) -> bool;

    /// Read the whole file (shared read)
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file and write `contents`
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `path` and any missing parents
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
