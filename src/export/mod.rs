//! Serialization layer: JSON export/import and CSV export
//!
//! Default output file names match what the tracker has always produced.

pub mod csv;
pub mod json;

pub use csv::export_items_csv;
pub use json::{export_items_json, import_items_json};

/// Default file name for JSON exports
pub const JSON_EXPORT_FILE: &str = "bucket-list-data.json";

/// Default file name for CSV exports
pub const CSV_EXPORT_FILE: &str = "bucket-list.csv";
