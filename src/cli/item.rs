//! Item CLI commands
//!
//! Implements the item management commands: add, list (with filters), show,
//! edit, delete, and the observed filter-value listing.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_item_details, format_item_list};
use crate::error::BucketResult;
use crate::models::{ItemDraft, Money, Status, Tier};
use crate::services::{filter, FilterCriteria, ItemService};
use crate::storage::ItemStore;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Status (want, in-progress, done)
        #[arg(short, long)]
        status: Option<Status>,
        /// Free-text type/category
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,
        /// Tags (repeat or comma-separate)
        #[arg(long = "tag", value_delimiter = ',')]
        tags: Vec<String>,
        /// Budget tier (essential, functional, nice-to-have, peak, luxury)
        #[arg(long)]
        tier: Option<Tier>,
        /// Price in whole currency units
        #[arg(short, long)]
        price: Option<i64>,
        /// Reference URL
        #[arg(short, long)]
        link: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List items, optionally filtered
    List {
        /// Case-insensitive search across name, notes, type, and tags
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by exact status
        #[arg(long)]
        status: Option<Status>,
        /// Filter by exact type
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,
        /// Filter by tag membership
        #[arg(long)]
        tag: Option<String>,
        /// Filter by exact tier
        #[arg(long)]
        tier: Option<Tier>,
    },

    /// Show item details
    Show {
        /// Item name or ID
        item: String,
    },

    /// Edit an item (unspecified fields keep their current values)
    Edit {
        /// Item name or ID
        item: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New status
        #[arg(short, long)]
        status: Option<Status>,
        /// New type
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,
        /// Replace the tag list (repeat or comma-separate)
        #[arg(long = "tag", value_delimiter = ',')]
        tags: Option<Vec<String>>,
        /// New tier
        #[arg(long)]
        tier: Option<Tier>,
        /// Remove the tier assignment
        #[arg(long)]
        clear_tier: bool,
        /// New price in whole currency units
        #[arg(short, long)]
        price: Option<i64>,
        /// New reference URL
        #[arg(short, long)]
        link: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item name or ID
        item: String,
    },

    /// List the filter values observed in the collection
    Filters,
}

/// Handle an item command
pub fn handle_item_command(
    store: &mut ItemStore,
    settings: &Settings,
    cmd: ItemCommands,
) -> BucketResult<()> {
    match cmd {
        ItemCommands::Add {
            name,
            status,
            item_type,
            tags,
            tier,
            price,
            link,
            notes,
        } => {
            let draft = ItemDraft {
                name,
                status: status.unwrap_or_default(),
                item_type,
                tags,
                tier,
                price: Money::from_units(price.unwrap_or(0)),
                link,
                notes,
            };

            let item = ItemService::new(store).create(draft)?;
            println!("Added item: {} ({})", item.name, item.id);
        }

        ItemCommands::List {
            search,
            status,
            item_type,
            tag,
            tier,
        } => {
            let criteria = FilterCriteria {
                search,
                status,
                item_type,
                tag,
                tier,
            };

            let visible = criteria.apply(store.items());
            print!(
                "{}",
                format_item_list(&visible, store.items(), &settings.currency_symbol)
            );
            if !criteria.is_unconstrained() {
                println!(
                    "\n{} of {} items shown.",
                    visible.len(),
                    store.len()
                );
            }
        }

        ItemCommands::Show { item } => {
            let item = ItemService::new(store).require(&item)?;
            print!(
                "{}",
                format_item_details(&item, store.items(), &settings.currency_symbol)
            );
        }

        ItemCommands::Edit {
            item,
            name,
            status,
            item_type,
            tags,
            tier,
            clear_tier,
            price,
            link,
            notes,
        } => {
            let existing = ItemService::new(store).require(&item)?;
            let mut draft = existing.to_draft();

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(status) = status {
                draft.status = status;
            }
            if let Some(item_type) = item_type {
                draft.item_type = Some(item_type);
            }
            if let Some(tags) = tags {
                draft.tags = tags;
            }
            if clear_tier {
                draft.tier = None;
            } else if let Some(tier) = tier {
                draft.tier = Some(tier);
            }
            if let Some(price) = price {
                draft.price = Money::from_units(price);
            }
            if let Some(link) = link {
                draft.link = Some(link);
            }
            if let Some(notes) = notes {
                draft.notes = Some(notes);
            }

            let updated = ItemService::new(store).edit(existing.id, draft)?;
            println!("Updated item: {} ({})", updated.name, updated.id);
        }

        ItemCommands::Delete { item } => {
            let existing = ItemService::new(store).require(&item)?;
            ItemService::new(store).remove(existing.id)?;
            println!("Deleted item: {} ({})", existing.name, existing.id);
        }

        ItemCommands::Filters => {
            let types = filter::type_options(store.items());
            let tags = filter::tag_options(store.items());

            if types.is_empty() {
                println!("Types: (none)");
            } else {
                println!("Types: {}", types.join(", "));
            }

            if tags.is_empty() {
                println!("Tags:  (none)");
            } else {
                println!("Tags:  {}", tags.join(", "));
            }
        }
    }

    Ok(())
}
