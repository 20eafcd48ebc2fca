//! Add command - create a new contact

use anyhow::Result;

use contactkeeper_core::ContactInfo;

use super::{confirm_overwrite, get_context, print_outcome};

pub async fn run(
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    force: bool,
) -> Result<()> {
    let ctx = get_context().await?;

    let info = ContactInfo::full_name(first_name.trim(), last_name.trim())
        .with_email(email.trim())
        .with_phone(phone.trim());
    ctx.validator.validate(&info)?;

    let outcome = ctx
        .edit_manager
        .save_contact(&info, None, |duplicate| confirm_overwrite(duplicate, force))
        .await?;

    print_outcome(&outcome);
    Ok(())
}
