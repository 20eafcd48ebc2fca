//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use contactkeeper_core::Contact;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render contacts as a table, sorted by last then first name
pub fn contacts_table(contacts: &[Contact]) -> Table {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by_key(|c| (c.last_name.to_lowercase(), c.first_name.to_lowercase()));

    let mut table = create_table();
    table.set_header(vec!["ID", "First name", "Last name", "Email", "Phone"]);
    for contact in sorted {
        table.add_row(vec![
            contact.id().to_string(),
            contact.first_name.clone(),
            contact.last_name.clone(),
            contact.email.clone(),
            contact.phone.clone(),
        ]);
    }
    table
}

/// Print one contact as key-value rows
pub fn print_contact(contact: &Contact) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["ID".to_string(), contact.id().to_string()]);
    table.add_row(vec!["First name".to_string(), contact.first_name.clone()]);
    table.add_row(vec!["Last name".to_string(), contact.last_name.clone()]);
    table.add_row(vec!["Email".to_string(), contact.email.clone()]);
    table.add_row(vec!["Phone".to_string(), contact.phone.clone()]);
    println!("{}", table);
}
