//! Item service
//!
//! The editing surface over the item store: validates drafts, normalizes
//! free-text fields and tags, and resolves the item references users type
//! on the command line (full id, short `itm-` form, or name).

use crate::error::{BucketError, BucketResult};
use crate::models::{Item, ItemDraft, ItemId};
use crate::storage::ItemStore;

/// Service for item management
pub struct ItemService<'a> {
    store: &'a mut ItemStore,
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(store: &'a mut ItemStore) -> Self {
        Self { store }
    }

    /// Validate and normalize a draft, then append it to the store
    pub fn create(&mut self, draft: ItemDraft) -> BucketResult<Item> {
        let draft = normalize(draft);
        draft
            .validate()
            .map_err(|e| BucketError::Validation(e.to_string()))?;

        self.store.add(draft)
    }

    /// Validate and normalize a draft, then replace the item with the given id
    pub fn edit(&mut self, id: ItemId, draft: ItemDraft) -> BucketResult<Item> {
        let draft = normalize(draft);
        draft
            .validate()
            .map_err(|e| BucketError::Validation(e.to_string()))?;

        self.store.update(id, draft)
    }

    /// Remove an item; returns whether a removal occurred
    pub fn remove(&mut self, id: ItemId) -> BucketResult<bool> {
        self.store.delete(id)
    }

    /// Resolve a user-supplied reference to an item
    ///
    /// Accepts a full UUID, the short `itm-xxxxxxxx` display form, or a
    /// case-insensitive name (first match in insertion order wins).
    pub fn find(&self, identifier: &str) -> Option<Item> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<ItemId>() {
            if let Some(item) = self.store.get(id) {
                return Some(item.clone());
            }
        }

        let lowered = identifier.to_lowercase();
        self.store
            .items()
            .iter()
            .find(|item| {
                item.id.to_string() == identifier || item.name.to_lowercase() == lowered
            })
            .cloned()
    }

    /// Resolve a reference or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> BucketResult<Item> {
        self.find(identifier)
            .ok_or_else(|| BucketError::item_not_found(identifier))
    }
}

/// Trim free-text fields, drop empties, and dedupe tags (first occurrence wins)
fn normalize(mut draft: ItemDraft) -> ItemDraft {
    draft.name = draft.name.trim().to_string();
    draft.item_type = clean_optional(draft.item_type);
    draft.link = clean_optional(draft.link);
    draft.notes = clean_optional(draft.notes);

    let mut tags = Vec::with_capacity(draft.tags.len());
    for tag in draft.tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    draft.tags = tags;

    draft
}

fn clean_optional(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
