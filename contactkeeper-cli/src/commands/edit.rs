//! Edit command - change fields of an existing contact

use anyhow::Result;
use colored::Colorize;

use contactkeeper_core::ContactInfo;

use super::{confirm_overwrite, get_context, print_outcome, require_contact, ContactFields};

pub async fn run(id: &str, fields: ContactFields, force: bool) -> Result<()> {
    let ctx = get_context().await?;
    let existing = require_contact(&ctx, id).await?;

    // Start from the stored values so omitted fields stay as they are
    let mut info = ContactInfo::from_contact(&existing);
    let entered: ContactInfo = fields.into();
    for (target, value) in [
        (&mut info.first_name, entered.first_name),
        (&mut info.last_name, entered.last_name),
        (&mut info.email, entered.email),
        (&mut info.phone, entered.phone),
    ] {
        if let Some(value) = value {
            *target = Some(value.trim().to_string());
        }
    }

    if !ctx
        .edit_manager
        .check_for_unsaved_changes(&info, Some(&existing))
    {
        println!("{}", "No changes".dimmed());
        return Ok(());
    }

    ctx.validator.validate(&info)?;

    let outcome = ctx
        .edit_manager
        .save_contact(&info, Some(&existing), |duplicate| {
            confirm_overwrite(duplicate, force)
        })
        .await?;

    print_outcome(&outcome);
    Ok(())
}
