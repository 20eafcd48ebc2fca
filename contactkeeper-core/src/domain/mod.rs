//! Core domain entities
//!
//! Pure data structures with matching and validation logic - no I/O.

mod contact;
mod contact_info;
pub mod result;

pub use contact::Contact;
pub use contact_info::ContactInfo;
