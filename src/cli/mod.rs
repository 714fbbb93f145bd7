//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod import;
pub mod item;

pub use budget::handle_budget_command;
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use item::{handle_item_command, ItemCommands};
