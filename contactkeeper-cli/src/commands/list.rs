//! List command - show all contacts

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context().await?;
    let contacts = ctx.contact_service.get_contacts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("{}", "No contacts yet. Add one with 'ck add'.".dimmed());
        return Ok(());
    }

    println!("{}", output::contacts_table(&contacts));
    println!("{} contact(s)", contacts.len());
    Ok(())
}
