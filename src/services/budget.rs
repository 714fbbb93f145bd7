//! Budget aggregation
//!
//! Pure functions deriving per-tier spending totals and over/under-budget
//! standings from the item collection. Nothing here is cached: every call
//! recomputes from the current items, so a summary can never go stale.

use crate::models::{Item, Money, Tier};

/// Spending position of one tier against its fixed limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSummary {
    pub tier: Tier,
    pub spent: Money,
}

impl TierSummary {
    /// The fixed limit for this tier
    pub fn limit(&self) -> Money {
        self.tier.limit()
    }

    /// Limit minus spent; negative when over budget
    pub fn remaining(&self) -> Money {
        self.limit() - self.spent
    }

    /// A tier is over budget iff its remaining amount is negative
    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Magnitude of the overrun (zero when under budget)
    pub fn overrun(&self) -> Money {
        if self.is_over_budget() {
            self.remaining().abs()
        } else {
            Money::zero()
        }
    }
}

/// Total price of items assigned to the given tier
///
/// Items without a recognized tier contribute to no bucket.
pub fn tier_spent(items: &[Item], tier: Tier) -> Money {
    items
        .iter()
        .filter(|item| item.tier == Some(tier))
        .map(|item| item.price)
        .sum()
}

/// Summaries for all five tiers in fixed order
pub fn summarize(items: &[Item]) -> Vec<TierSummary> {
    Tier::all()
        .iter()
        .map(|&tier| TierSummary {
            tier,
            spent: tier_spent(items, tier),
        })
        .collect()
}

/// Whether an item sits in a tier whose total spend exceeds its limit
///
/// Recomputed against the whole collection on every render; an item without
/// a recognized tier is never flagged.
pub fn item_over_budget(items: &[Item], item: &Item) -> bool {
    match item.tier {
        Some(tier) => tier_spent(items, tier) > tier.limit(),
        None => false,
    }
}
