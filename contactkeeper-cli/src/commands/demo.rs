//! Demo command - populate the store with sample contacts

use anyhow::Result;

use contactkeeper_core::services::generate_demo_contact_infos;
use contactkeeper_core::ContactInfo;

use super::get_context;
use crate::output;

pub async fn run(count: usize) -> Result<()> {
    let ctx = get_context().await?;

    let mut added = 0;
    let mut skipped = 0;
    for info in generate_demo_contact_infos(count) {
        // Never merge demo data into real contacts
        let name_taken = !ctx
            .contact_service
            .find_contacts(&ContactInfo {
                email: None,
                phone: None,
                ..info.clone()
            })
            .await?
            .is_empty();
        if name_taken {
            skipped += 1;
            continue;
        }

        ctx.contact_service.add_contact(&info).await?;
        added += 1;
    }

    output::success(&format!("✓ Added {} demo contact(s)", added));
    if skipped > 0 {
        output::info(&format!(
            "Skipped {} name(s) that already exist",
            skipped
        ));
    }
    Ok(())
}
