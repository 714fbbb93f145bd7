//! Filter engine
//!
//! Pure predicate composition over the item collection, plus the derived
//! option sets the presentation layer offers for the type and tag filters.
//! Filtering never reorders: the result is the ordered subsequence of the
//! input satisfying every supplied criterion.

use crate::models::{Item, Status, Tier};

/// Filter criteria; every field is optional, empty meaning "no constraint"
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, notes, type, and tags
    pub search: Option<String>,
    /// Exact status match
    pub status: Option<Status>,
    /// Exact type match
    pub item_type: Option<String>,
    /// Tag membership
    pub tag: Option<String>,
    /// Exact tier match
    pub tier: Option<Tier>,
}

impl FilterCriteria {
    /// Whether no constraint is set (the cleared-filters state)
    pub fn is_unconstrained(&self) -> bool {
        nonempty(&self.search).is_none()
            && self.status.is_none()
            && nonempty(&self.item_type).is_none()
            && nonempty(&self.tag).is_none()
            && self.tier.is_none()
    }

    /// Test a single item against all criteria
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(term) = nonempty(&self.search) {
            let term = term.to_lowercase();
            let in_name = item.name.to_lowercase().contains(&term);
            let in_notes = item
                .notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&term));
            let in_type = item
                .item_type
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&term));
            let in_tags = item.tags.iter().any(|t| t.to_lowercase().contains(&term));

            if !(in_name || in_notes || in_type || in_tags) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        if let Some(wanted) = nonempty(&self.item_type) {
            if item.item_type.as_deref() != Some(wanted) {
                return false;
            }
        }

        if let Some(tag) = nonempty(&self.tag) {
            if !item.tags.iter().any(|t| t == tag) {
                return false;
            }
        }

        if let Some(tier) = self.tier {
            if item.tier != Some(tier) {
                return false;
            }
        }

        true
    }

    /// Apply the criteria, preserving input order
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Distinct non-empty type values in first-seen order
pub fn type_options(items: &[Item]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if let Some(t) = item.item_type.as_deref() {
            if !t.is_empty() && !seen.iter().any(|s| s == t) {
                seen.push(t.to_string());
            }
        }
    }
    seen
}

/// Sorted union of all tags across the collection
pub fn tag_options(items: &[Item]) -> Vec<String> {
    let mut tags = Vec::new();
    for item in items {
        for tag in &item.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort();
    tags
}
