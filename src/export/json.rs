//! JSON export and import
//!
//! The interchange format is the bare item sequence, pretty-printed. Import
//! accepts any JSON document whose top level is an array of objects and
//! coerces each record leniently (see the item model); anything else is
//! rejected as `InvalidFormat` without touching existing data.

use std::io::Write;

use crate::error::{BucketError, BucketResult};
use crate::models::Item;

/// Serialize the full ordered item sequence, pretty-printed
pub fn export_items_json<W: Write>(items: &[Item], writer: &mut W) -> BucketResult<()> {
    serde_json::to_writer_pretty(writer, items)
        .map_err(|e| BucketError::Export(e.to_string()))?;
    Ok(())
}

/// Parse an imported document into an item sequence
///
/// Fails with `InvalidFormat` when the document is not parseable JSON, its
/// top level is not an array, or an element is not an object.
pub fn import_items_json(input: &str) -> BucketResult<Vec<Item>> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| BucketError::InvalidFormat(format!("not valid JSON: {}", e)))?;

    let elements = value
        .as_array()
        .ok_or_else(|| BucketError::InvalidFormat("top-level value is not an array".into()))?;

    let mut items = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if !element.is_object() {
            return Err(BucketError::InvalidFormat(format!(
                "element {} is not an object",
                index
            )));
        }

        let item: Item = serde_json::from_value(element.clone())
            .map_err(|e| BucketError::InvalidFormat(format!("element {}: {}", index, e)))?;
        items.push(item);
    }

    Ok(items)
}
