//! Config command - show or change where contacts are stored

use anyhow::{bail, Result};
use colored::Colorize;

use contactkeeper_core::config::{Config, DATA_FILE_ENV};

use super::{get_context, get_data_dir};
use crate::output;

pub async fn run(data_file: Option<String>) -> Result<()> {
    match data_file {
        Some(name) => set_data_file(name.trim()),
        None => show().await,
    }
}

async fn show() -> Result<()> {
    let ctx = get_context().await?;

    println!();
    println!("{}", "ContactKeeper Config".bold());
    println!("  Data dir:  {}", get_data_dir().display());
    println!("  Data file: {}", ctx.config.data_file);
    println!("  Path:      {}", ctx.data_file.display());
    if std::env::var(DATA_FILE_ENV).is_ok() {
        println!("  {}", format!("(overridden by {})", DATA_FILE_ENV).dimmed());
    }
    println!();
    Ok(())
}

fn set_data_file(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Data file name cannot be empty");
    }

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let mut config = Config::load(&data_dir)?;
    config.data_file = name.to_string();
    config.save(&data_dir)?;

    output::success(&format!("✓ Contacts will be stored in {}", name));
    if std::env::var(DATA_FILE_ENV).is_ok() {
        output::warning(&format!("{} is set and takes precedence", DATA_FILE_ENV));
    }
    Ok(())
}
