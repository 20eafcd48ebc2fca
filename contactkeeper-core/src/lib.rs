//! ContactKeeper Core - Business logic for personal contact management
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Contact, ContactInfo) and error types
//! - **ports**: Trait definitions for external dependencies (ContactRepository, FileSystem)
//! - **services**: Business logic orchestration (contact list, edit flow, validation)
//! - **adapters**: Concrete implementations (JSON file store, local disk)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::app_data::AppDataInitializer;
use adapters::json::JsonContactRepository;
use adapters::local_fs::LocalFileSystem;
use config::Config;
use ports::FileSystem;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Contact, ContactInfo};

/// Main context for ContactKeeper operations
///
/// Holds the configuration, the resolved data file and the services.
pub struct ContactKeeperContext {
    pub config: Config,
    pub data_file: PathBuf,
    pub contact_service: Arc<ContactService>,
    pub edit_manager: EditContactManager,
    pub validator: ContactValidator,
}

impl ContactKeeperContext {
    /// Create a context rooted at `data_dir`
    ///
    /// Creates the directory if needed. The contact file itself is created
    /// on first read.
    pub async fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new());

        let data_file = AppDataInitializer::new(Arc::clone(&fs))
            .initialize(data_dir, &config.data_file)
            .await?;

        let repository = Arc::new(JsonContactRepository::new(&data_file, fs)?);
        let contact_service = Arc::new(ContactService::new(repository));
        let edit_manager = EditContactManager::new(Arc::clone(&contact_service));

        Ok(Self {
            config,
            data_file,
            contact_service,
            edit_manager,
            validator: ContactValidator::new(),
        })
    }
}
