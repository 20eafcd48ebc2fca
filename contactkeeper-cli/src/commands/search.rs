//! Search command - find contacts by any combination of fields

use anyhow::Result;
use colored::Colorize;

use contactkeeper_core::ContactInfo;

use super::{get_context, ContactFields};
use crate::output;

pub async fn run(fields: ContactFields, json: bool) -> Result<()> {
    let ctx = get_context().await?;
    let query: ContactInfo = fields.into();

    if query.is_empty() && !json {
        output::warning("No search fields given, showing all contacts.");
    }

    let found = ctx.contact_service.find_contacts(&query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("{}", "No matching contacts".dimmed());
        return Ok(());
    }

    println!("{}", output::contacts_table(&found));
    println!("{} match(es)", found.len());
    Ok(())
}
