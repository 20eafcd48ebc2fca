//! Show command - display a single contact

use anyhow::Result;

use super::{get_context, require_contact};
use crate::output;

pub async fn run(id: &str, json: bool) -> Result<()> {
    let ctx = get_context().await?;
    let contact = require_contact(&ctx, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else {
        output::print_contact(&contact);
    }
    Ok(())
}
