//! Item store: the single source of truth for the item collection
//!
//! An insertion-ordered collection backed by one JSON persistence slot.
//! Every mutating operation writes the full collection back to the slot
//! before returning, so the file always reflects the last completed action.

use std::path::PathBuf;

use crate::error::{BucketError, BucketResult};
use crate::models::{Item, ItemDraft, ItemId};

use super::file_io::{read_json, write_json_atomic};

/// Ordered item collection synchronized to a JSON file
pub struct ItemStore {
    path: PathBuf,
    items: Vec<Item>,
}

impl ItemStore {
    /// Create a store bound to a persistence slot path (not yet loaded)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: Vec::new(),
        }
    }

    /// Load the collection from the slot; a missing file means empty
    pub fn load(&mut self) -> BucketResult<()> {
        self.items = read_json(&self.path)?;
        Ok(())
    }

    /// Read-only snapshot in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up a single item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the store
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Create an item from a draft, append it, persist, and return it
    pub fn add(&mut self, draft: ItemDraft) -> BucketResult<Item> {
        let item = Item::new(draft);
        self.items.push(item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Replace the fields of the item with the given id, keeping its
    /// position in insertion order
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> BucketResult<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| BucketError::item_not_found(id.to_string()))?;

        item.apply(draft);
        let updated = item.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the item with the given id; returns whether a removal occurred
    pub fn delete(&mut self, id: ItemId) -> BucketResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Wholesale replace the collection (file import), then persist
    pub fn replace_all(&mut self, items: Vec<Item>) -> BucketResult<()> {
        self.items = items;
        self.persist()
    }

    fn persist(&self) -> BucketResult<()> {
        write_json_atomic(&self.path, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Status, Tier};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ItemStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        let mut store = ItemStore::new(path);
        store.load().unwrap();
        (temp_dir, store)
    }

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (_temp_dir, mut store) = create_test_store();

        let a = store.add(draft("Bike")).unwrap();
        let b = store.add(draft("Camera")).unwrap();

        let names: Vec<_> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bike", "Camera"]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_preserves_position() {
        let (_temp_dir, mut store) = create_test_store();

        store.add(draft("First")).unwrap();
        let target = store.add(draft("Second")).unwrap();
        store.add(draft("Third")).unwrap();

        let mut changed = draft("Second Revised");
        changed.status = Status::Done;
        changed.price = Money::from_units(500);
        let updated = store.update(target.id, changed).unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(store.items()[1].name, "Second Revised");
        assert_eq!(store.items()[1].status, Status::Done);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(draft("Only")).unwrap();

        let err = store.update(ItemId::new(), draft("Nope")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.items()[0].name, "Only");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, mut store) = create_test_store();
        let item = store.add(draft("Target")).unwrap();

        assert!(store.delete(item.id).unwrap());
        assert!(store.is_empty());

        // Second delete of the same id: no-op, store unchanged
        assert!(!store.delete(item.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_persists_across_reload() {
        let (temp_dir, mut store) = create_test_store();

        let mut d = draft("Telescope");
        d.tier = Some(Tier::NiceToHave);
        d.price = Money::from_units(12_000_000);
        d.tags = vec!["astronomy".into()];
        let created = store.add(d).unwrap();

        let mut reloaded = ItemStore::new(temp_dir.path().join("items.json"));
        reloaded.load().unwrap();

        assert_eq!(reloaded.len(), 1);
        let item = reloaded.get(created.id).unwrap();
        assert_eq!(item.name, "Telescope");
        assert_eq!(item.tier, Some(Tier::NiceToHave));
        assert_eq!(item.price.units(), 12_000_000);
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(draft("Old")).unwrap();

        let replacement = vec![Item::new(draft("New A")), Item::new(draft("New B"))];
        store.replace_all(replacement).unwrap();

        let names: Vec<_> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["New A", "New B"]);
    }

    // Model-based test: a scripted sequence of operations against the store
    // must match the same sequence applied to a plain Vec reference model.
    #[test]
    fn test_matches_reference_model() {
        let (_temp_dir, mut store) = create_test_store();
        let mut model: Vec<Item> = Vec::new();

        // adds
        for name in ["a", "b", "c", "d", "e"] {
            let item = store.add(draft(name)).unwrap();
            model.push(item);
        }

        // update the middle item
        let mid = model[2].id;
        let updated = store.update(mid, draft("c2")).unwrap();
        model[2] = updated;

        // delete the first and last items
        for idx in [0usize, 3] {
            let id = model[idx].id;
            assert!(store.delete(id).unwrap());
            model.remove(idx);
        }

        // delete something already gone
        let gone = ItemId::new();
        assert!(!store.delete(gone).unwrap());

        // a few more adds after deletions
        for name in ["f", "g"] {
            let item = store.add(draft(name)).unwrap();
            model.push(item);
        }

        assert_eq!(store.items(), model.as_slice());
    }
}
