//! Storage layer for bucket-cli
//!
//! One JSON persistence slot holds the whole item collection. Writes are
//! atomic so an interrupted save never corrupts the previous state.

pub mod file_io;
pub mod items;

pub use file_io::{read_json, write_json_atomic};
pub use items::ItemStore;
