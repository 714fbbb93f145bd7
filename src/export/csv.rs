//! CSV export
//!
//! One row per item with a fixed column order. Tags are joined with "; ",
//! the price is a raw integer, and an unrecognized tier exports blank.
//! Export is one-directional; there is no CSV import.

use std::io::Write;

use crate::error::{BucketError, BucketResult};
use crate::models::Item;

/// CSV column headers, in emitted order
pub const CSV_HEADERS: [&str; 8] = [
    "Name", "Status", "Type", "Tags", "Tier", "Price", "Link", "Notes",
];

/// Export the full ordered item sequence to CSV
pub fn export_items_csv<W: Write>(items: &[Item], writer: &mut W) -> BucketResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| BucketError::Export(e.to_string()))?;

    for item in items {
        let tags = item.tags.join("; ");
        let price = item.price.units().to_string();

        csv_writer
            .write_record([
                item.name.as_str(),
                item.status.as_str(),
                item.item_type.as_deref().unwrap_or(""),
                tags.as_str(),
                item.tier.map(|t| t.as_str()).unwrap_or(""),
                price.as_str(),
                item.link.as_deref().unwrap_or(""),
                item.notes.as_deref().unwrap_or(""),
            ])
            .map_err(|e| BucketError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BucketError::Export(e.to_string()))?;

    Ok(())
}
