//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod contact;
pub mod demo;
mod edit_contact;
mod validation;

pub use contact::{ContactService, ContactsChanged};
pub use demo::generate_demo_contact_infos;
pub use edit_contact::{EditContactManager, SaveOutcome};
pub use validation::ContactValidator;
