//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod file_system;
mod repository;

pub use file_system::FileSystem;
pub use repository::ContactRepository;
