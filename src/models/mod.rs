//! Core data models for bucket-cli
//!
//! This module contains the data structures that represent the bucket-list
//! domain: items, their budget tiers and statuses, prices, and ids.

pub mod ids;
pub mod item;
pub mod money;
pub mod status;
pub mod tier;

pub use ids::ItemId;
pub use item::{Item, ItemDraft, ItemValidationError};
pub use money::Money;
pub use status::Status;
pub use tier::Tier;
