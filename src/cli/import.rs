//! Import CLI command
//!
//! Reads a JSON file and wholesale-replaces the item collection. The
//! document is parsed completely before anything is replaced, so a failed
//! import leaves the existing items and their persistence slot untouched.

use std::fs;
use std::path::PathBuf;

use crate::error::{BucketError, BucketResult};
use crate::export::import_items_json;
use crate::storage::ItemStore;

/// Handle the import command
pub fn handle_import_command(store: &mut ItemStore, file: PathBuf) -> BucketResult<()> {
    let contents = fs::read_to_string(&file).map_err(|e| {
        BucketError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let items = import_items_json(&contents)?;
    let count = items.len();

    store.replace_all(items)?;

    println!("Imported {} items from: {}", count, file.display());
    Ok(())
}
