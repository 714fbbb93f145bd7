//! Export CLI commands
//!
//! Writes the item collection to a JSON or CSV file. An empty store is
//! rejected with a notice and no file is produced.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{BucketError, BucketResult};
use crate::export::{export_items_csv, export_items_json, CSV_EXPORT_FILE, JSON_EXPORT_FILE};
use crate::storage::ItemStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all items to a JSON file
    Json {
        /// Output file path (default: bucket-list-data.json)
        output: Option<PathBuf>,
    },

    /// Export all items to a CSV file
    Csv {
        /// Output file path (default: bucket-list.csv)
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &ItemStore, cmd: ExportCommands) -> BucketResult<()> {
    if store.is_empty() {
        println!("No items to export.");
        return Ok(());
    }

    let (output, is_json) = match cmd {
        ExportCommands::Json { output } => {
            (output.unwrap_or_else(|| PathBuf::from(JSON_EXPORT_FILE)), true)
        }
        ExportCommands::Csv { output } => {
            (output.unwrap_or_else(|| PathBuf::from(CSV_EXPORT_FILE)), false)
        }
    };

    let file = File::create(&output).map_err(|e| {
        BucketError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    if is_json {
        export_items_json(store.items(), &mut writer)?;
    } else {
        export_items_csv(store.items(), &mut writer)?;
    }

    println!("Exported {} items to: {}", store.len(), output.display());
    Ok(())
}
