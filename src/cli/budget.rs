//! Budget CLI command
//!
//! Prints the per-tier budget summary.

use crate::config::Settings;
use crate::display::format_budget_summary;
use crate::error::BucketResult;
use crate::services::summarize;
use crate::storage::ItemStore;

/// Handle the budget command
pub fn handle_budget_command(store: &ItemStore, settings: &Settings) -> BucketResult<()> {
    let summaries = summarize(store.items());
    print!(
        "{}",
        format_budget_summary(&summaries, &settings.currency_symbol)
    );
    Ok(())
}
