//! CLI command implementations

pub mod add;
pub mod config;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;
use uuid::Uuid;

use contactkeeper_core::config::default_data_dir;
use contactkeeper_core::services::SaveOutcome;
use contactkeeper_core::{Contact, ContactInfo, ContactKeeperContext};

use crate::output;

/// Optional contact fields shared by `search` and `edit`
#[derive(Args, Debug, Default)]
pub struct ContactFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<ContactFields> for ContactInfo {
    fn from(fields: ContactFields) -> Self {
        ContactInfo {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    default_data_dir()
}

/// Create the context over the data directory
pub async fn get_context() -> Result<ContactKeeperContext> {
    let data_dir = get_data_dir();
    ContactKeeperContext::new(&data_dir)
        .await
        .with_context(|| format!("Failed to open contacts in {:?}", data_dir))
}

pub fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim()).with_context(|| format!("Invalid contact ID: {}", id))
}

/// Look up a contact or fail with a readable message
pub async fn require_contact(ctx: &ContactKeeperContext, id: &str) -> Result<Contact> {
    let id = parse_id(id)?;
    ctx.contact_service
        .get_contact(id)
        .await?
        .with_context(|| format!("Contact {} not found", id))
}

/// Ask a yes/no question; without a terminal the answer is `default`
pub fn confirm(prompt: &str, default: bool) -> io::Result<bool> {
    if atty::isnt(atty::Stream::Stdin) {
        return Ok(default);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Ask whether to merge into an existing contact with the same full name
///
/// A failed prompt aborts the save instead of counting as "no".
pub fn confirm_overwrite(
    duplicate: &Contact,
    force: bool,
) -> std::result::Result<bool, contactkeeper_core::Error> {
    if force {
        return Ok(true);
    }
    println!(
        "\n{}",
        format!(
            "A contact named '{}' already exists ({}).",
            duplicate.full_name(),
            duplicate.id()
        )
        .yellow()
    );
    println!("{}\n", "Saving will overwrite it with the entered data.".dimmed());
    Ok(confirm("Overwrite the existing contact?", false)?)
}

/// Print the result of a save
pub fn print_outcome(outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Added { contact } => {
            output::success(&format!("✓ Added {} ({})", contact.full_name(), contact.id()));
        }
        SaveOutcome::Updated { contact } => {
            output::success(&format!("✓ Updated {} ({})", contact.full_name(), contact.id()));
        }
        SaveOutcome::Merged { into } => {
            output::success(&format!("✓ Merged into existing contact {}", into));
        }
        SaveOutcome::Cancelled => {
            println!("{}", "Cancelled".dimmed());
        }
        SaveOutcome::NotFound { id } => {
            output::warning(&format!("Contact {} no longer exists", id));
        }
    }
}
