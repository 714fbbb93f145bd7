use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bucket_cli::cli::{
    handle_budget_command, handle_export_command, handle_import_command, handle_item_command,
    ExportCommands, ItemCommands,
};
use bucket_cli::config::{BucketPaths, Settings};
use bucket_cli::models::Item;
use bucket_cli::storage::{write_json_atomic, ItemStore};

#[derive(Parser)]
#[command(
    name = "bucket",
    version,
    about = "Terminal-based personal bucket-list tracker with tier budgets",
    long_about = "bucket-cli tracks the things you want to buy or do, assigns \
                  each item to a budget tier with a fixed spending limit, and \
                  shows you where each tier stands. Items live in a local JSON \
                  file and can be exported to JSON or CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show the per-tier budget summary
    Budget,

    /// Export items to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import items from a JSON file (replaces the whole collection)
    Import {
        /// Path to a JSON file containing an array of items
        file: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BucketPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut store = ItemStore::new(paths.items_file());
    store.load()?;

    match cli.command {
        Some(Commands::Item(cmd)) => {
            handle_item_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget) => {
            handle_budget_command(&store, &settings)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut store, file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing bucket-cli at: {}", paths.base_dir().display());
            if !paths.items_file().exists() {
                write_json_atomic(paths.items_file(), &Vec::<Item>::new())?;
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'bucket item add <name>' to add your first item.");
            println!("Run 'bucket budget' to see the per-tier budget summary.");
        }
        Some(Commands::Config) => {
            println!("bucket-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.items_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("bucket-cli - Terminal-based personal bucket-list tracker");
            println!();
            println!("Run 'bucket --help' for usage information.");
            println!("Run 'bucket item list' to see your items.");
        }
    }

    Ok(())
}
