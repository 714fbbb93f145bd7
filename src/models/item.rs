//! Bucket-list item model
//!
//! The sole entity of the application. Deserialization is deliberately
//! lenient so that imported files with missing or malformed fields coerce to
//! defaults instead of failing the whole document: a record missing its id
//! gets a fresh one, an unrecognized tier becomes `None` (excluding the item
//! from budget aggregation), and a missing price counts as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;
use super::status::Status;
use super::tier::Tier;

/// A single bucket-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: ItemId,

    /// Display label
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    /// Lifecycle status
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Status,

    /// Free-text category
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub item_type: Option<String>,

    /// Ordered free-text labels
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// Budget tier; `None` when absent or unrecognized
    #[serde(default, deserialize_with = "lenient_tier")]
    pub tier: Option<Tier>,

    /// Price in whole currency units, zero when absent
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Money,

    /// Optional URL, not validated
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,

    /// Optional free text
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: Option<String>,

    /// When the item was created
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the item was last modified
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields of an item, used by create and update
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub status: Status,
    pub item_type: Option<String>,
    pub tags: Vec<String>,
    pub tier: Option<Tier>,
    pub price: Money,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl ItemDraft {
    /// Validate the draft before it reaches the store
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if self.price.is_negative() {
            return Err(ItemValidationError::NegativePrice);
        }

        Ok(())
    }
}

impl Item {
    /// Create a new item from a draft, assigning a fresh id
    pub fn new(draft: ItemDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            name: draft.name,
            status: draft.status,
            item_type: draft.item_type,
            tags: draft.tags,
            tier: draft.tier,
            price: draft.price,
            link: draft.link,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the caller-supplied fields, preserving id and created_at
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.status = draft.status;
        self.item_type = draft.item_type;
        self.tags = draft.tags;
        self.tier = draft.tier;
        self.price = draft.price;
        self.link = draft.link;
        self.notes = draft.notes;
        self.updated_at = Utc::now();
    }

    /// The draft equivalent of this item's current fields
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            status: self.status,
            item_type: self.item_type.clone(),
            tags: self.tags.clone(),
            tier: self.tier,
            price: self.price,
            link: self.link.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for item drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NegativePrice,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NegativePrice => write!(f, "Item price cannot be negative"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

// Lenient field deserializers. Each one reads the raw JSON value and coerces
// unusable shapes to the field default instead of failing the document.

fn lenient_id<'de, D: Deserializer<'de>>(de: D) -> Result<ItemId, D::Error> {
    // Ids from other tools (e.g. timestamp strings) are replaced with fresh ones
    let value = serde_json::Value::deserialize(de)?;
    Ok(value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

fn lenient_name<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value.as_str().map(str::to_string).unwrap_or_default())
}

fn lenient_status<'de, D: Deserializer<'de>>(de: D) -> Result<Status, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

fn lenient_tier<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Tier>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_tags<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value
        .as_array()
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}

fn lenient_price<'de, D: Deserializer<'de>>(de: D) -> Result<Money, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    let units = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(0);
    Ok(Money::from_units(units))
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ItemDraft {
        ItemDraft {
            name: "Touring Bike".into(),
            status: Status::Want,
            item_type: Some("gear".into()),
            tags: vec!["fitness".into(), "travel".into()],
            tier: Some(Tier::Functional),
            price: Money::from_units(25_000_000),
            link: Some("https://example.com/bike".into()),
            notes: Some("Prefer steel frame".into()),
        }
    }

    #[test]
    fn test_new_assigns_id_and_timestamps() {
        let item = Item::new(sample_draft());
        assert_eq!(item.name, "Touring Bike");
        assert_eq!(item.status, Status::Want);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_apply_preserves_identity() {
        let mut item = Item::new(sample_draft());
        let id = item.id;
        let created = item.created_at;

        let mut draft = sample_draft();
        draft.name = "Gravel Bike".into();
        draft.status = Status::InProgress;
        item.apply(draft);

        assert_eq!(item.id, id);
        assert_eq!(item.created_at, created);
        assert_eq!(item.name, "Gravel Bike");
        assert_eq!(item.status, Status::InProgress);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = sample_draft();
        assert!(draft.validate().is_ok());

        draft.name = "   ".into();
        assert_eq!(draft.validate(), Err(ItemValidationError::EmptyName));

        draft.name = "Valid".into();
        draft.price = Money::from_units(-1);
        assert_eq!(draft.validate(), Err(ItemValidationError::NegativePrice));
    }

    #[test]
    fn test_serialization_round_trip() {
        let item = Item::new(sample_draft());
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn test_type_field_renamed() {
        let item = Item::new(sample_draft());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"gear\""));
        assert!(!json.contains("item_type"));
    }

    #[test]
    fn test_lenient_minimal_record() {
        // Only a name: everything else coerces to defaults
        let item: Item = serde_json::from_str(r#"{"name":"Kayak"}"#).unwrap();
        assert_eq!(item.name, "Kayak");
        assert_eq!(item.status, Status::Want);
        assert_eq!(item.tier, None);
        assert_eq!(item.price, Money::zero());
        assert!(item.tags.is_empty());
        assert!(item.item_type.is_none());
    }

    #[test]
    fn test_lenient_unknown_tier_and_status() {
        let item: Item =
            serde_json::from_str(r#"{"name":"X","tier":"platinum","status":"someday"}"#).unwrap();
        assert_eq!(item.tier, None);
        assert_eq!(item.status, Status::Want);
    }

    #[test]
    fn test_lenient_fractional_price() {
        // The original stored parseFloat results; fractions truncate
        let item: Item = serde_json::from_str(r#"{"name":"X","price":1500000.75}"#).unwrap();
        assert_eq!(item.price.units(), 1_500_000);
    }

    #[test]
    fn test_lenient_foreign_id_gets_replaced() {
        // The browser original stored Date.now() strings as ids
        let item: Item =
            serde_json::from_str(r#"{"id":"1712345678901","name":"Kayak"}"#).unwrap();
        assert!(!item.id.as_uuid().is_nil());

        // A real UUID id survives the round trip
        let keep: Item = serde_json::from_str(
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Kayak"}"#,
        )
        .unwrap();
        assert_eq!(
            keep.id.as_uuid().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_lenient_malformed_tags() {
        let item: Item =
            serde_json::from_str(r#"{"name":"X","tags":["a",42,"b"]}"#).unwrap();
        assert_eq!(item.tags, vec!["a".to_string(), "b".to_string()]);

        let item: Item = serde_json::from_str(r#"{"name":"X","tags":"oops"}"#).unwrap();
        assert!(item.tags.is_empty());
    }
}
