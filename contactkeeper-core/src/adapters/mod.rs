//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file storage for the ContactRepository port
//! - tokio::fs for the FileSystem port
//! - Data directory initialization on top of the FileSystem port

pub mod app_data;
pub mod json;
pub mod local_fs;
