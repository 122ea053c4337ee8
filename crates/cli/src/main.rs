//! Home Bakery CLI - catalog inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List every product in the configured catalog
//! bakery-cli catalog list
//!
//! # List one category from a specific file
//! bakery-cli catalog list --content ./catalog.json --category "Пирожки"
//!
//! # Validate a catalog file before deploying it
//! bakery-cli catalog check --content ./catalog.json
//! ```
//!
//! Without `--content` the file is `$BAKERY_CONTENT_DIR/catalog.json`, the
//! same one the storefront loads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bakery-cli")]
#[command(author, version, about = "Home Bakery CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print products, optionally filtered by category
    List {
        /// Catalog JSON file (defaults to the storefront's content file)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Category label; "Все" or omitted shows everything
        #[arg(short = 'k', long)]
        category: Option<String>,
    },
    /// Validate a catalog file and print a summary
    Check {
        /// Catalog JSON file (defaults to the storefront's content file)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { content, category } => {
                commands::catalog::list(content, category.as_deref())?;
            }
            CatalogAction::Check { content } => commands::catalog::check(content)?,
        },
    }
    Ok(())
}
