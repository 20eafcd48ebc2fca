//! Delete command - remove a contact

use anyhow::Result;
use colored::Colorize;

use super::{confirm, get_context, require_contact};
use crate::output;

pub async fn run(id: &str, force: bool) -> Result<()> {
    let ctx = get_context().await?;
    let contact = require_contact(&ctx, id).await?;

    // Confirm removal unless --force
    if !force {
        println!(
            "\n{}",
            format!("This will delete '{}'.", contact.full_name()).yellow()
        );
        if !confirm("Are you sure?", false)? {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    match ctx.contact_service.delete_contact(contact.id()).await? {
        Some(deleted) => output::success(&format!("✓ Deleted contact {}", deleted)),
        None => output::warning(&format!("Contact {} no longer exists", contact.id())),
    }
    Ok(())
}
