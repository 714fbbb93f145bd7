//! Business logic layer
//!
//! Pure derivations (budget aggregation, filtering) and the item editing
//! surface sit here, between storage and the CLI handlers.

pub mod budget;
pub mod filter;
pub mod item;

pub use budget::{item_over_budget, summarize, tier_spent, TierSummary};
pub use filter::{tag_options, type_options, FilterCriteria};
pub use item::ItemService;
