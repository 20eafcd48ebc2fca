//! ContactKeeper CLI - personal contacts in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, config, delete, demo, edit, list, search, show};

/// ContactKeeper - personal contacts in your terminal
#[derive(Parser)]
#[command(name = "ck", version, about, long_about = None)]
struct Cli {
    /// Show informational log output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single contact
    Show {
        /// Contact ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search contacts (case-insensitive, exact per field)
    Search {
        #[command(flatten)]
        fields: commands::ContactFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new contact
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Overwrite an existing contact with the same name without asking
        #[arg(long, short)]
        force: bool,
    },

    /// Edit an existing contact (omitted fields keep their value)
    Edit {
        /// Contact ID
        id: String,
        #[command(flatten)]
        fields: commands::ContactFields,
        /// Overwrite an existing contact with the same name without asking
        #[arg(long, short)]
        force: bool,
    },

    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Add randomly generated demo contacts
    Demo {
        /// Number of contacts to add
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// Show storage settings, or change the contact file name
    Config {
        /// File name for contacts, relative to the data directory
        #[arg(long)]
        data_file: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { json } => list::run(json).await,
        Commands::Show { id, json } => show::run(&id, json).await,
        Commands::Search { fields, json } => search::run(fields, json).await,
        Commands::Add { first_name, last_name, email, phone, force } => {
            add::run(first_name, last_name, email, phone, force).await
        }
        Commands::Edit { id, fields, force } => edit::run(&id, fields, force).await,
        Commands::Delete { id, force } => delete::run(&id, force).await,
        Commands::Demo { count } => demo::run(count).await,
        Commands::Config { data_file } => config::run(data_file).await,
    }
}
