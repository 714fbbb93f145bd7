//! Item display formatting
//!
//! Formats item lists and detail views for terminal output.

use crate::models::Item;
use crate::services::budget;

/// Format a list of items as an aligned table
///
/// `visible` is the (possibly filtered) view to render; `all_items` is the
/// whole collection, needed to recompute each item's over-budget flag.
pub fn format_item_list(visible: &[&Item], all_items: &[Item], currency: &str) -> String {
    if visible.is_empty() {
        return "No items found. Add some items to your bucket list!".to_string();
    }

    let name_width = visible
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let price_width = visible
        .iter()
        .map(|i| i.price.format_with_symbol(currency).len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<width$}  {:<11}  {:<12}  {:>pwidth$}  {}\n",
        "ID",
        "Item",
        "Status",
        "Tier",
        "Price",
        "Tags",
        width = name_width,
        pwidth = price_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<width$}  {:-<11}  {:-<12}  {:->pwidth$}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width,
        pwidth = price_width
    ));

    for item in visible {
        let tier = item.tier.map(|t| t.as_str()).unwrap_or("-");
        let marker = if budget::item_over_budget(all_items, item) {
            "  [OVER BUDGET]"
        } else {
            ""
        };

        output.push_str(&format!(
            "{:<12}  {:<width$}  {:<11}  {:<12}  {:>pwidth$}  {}{}\n",
            item.id.to_string(),
            item.name,
            item.status.as_str(),
            tier,
            item.price.format_with_symbol(currency),
            item.tags.join(", "),
            marker,
            width = name_width,
            pwidth = price_width
        ));
    }

    output
}

/// Format a single item as a detail view
pub fn format_item_details(item: &Item, all_items: &[Item], currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", item.name));
    output.push_str(&format!("{:-<width$}\n", "", width = item.name.len().max(4)));

    output.push_str(&format!("  ID:      {}\n", item.id));
    output.push_str(&format!("  Status:  {}\n", item.status));

    if let Some(item_type) = &item.item_type {
        output.push_str(&format!("  Type:    {}\n", item_type));
    }

    match item.tier {
        Some(tier) => output.push_str(&format!("  Tier:    {}\n", tier.display_name())),
        None => output.push_str("  Tier:    (none)\n"),
    }

    if !item.price.is_zero() {
        output.push_str(&format!(
            "  Price:   {}\n",
            item.price.format_with_symbol(currency)
        ));
    }

    if let Some(link) = &item.link {
        output.push_str(&format!("  Link:    {}\n", link));
    }

    if let Some(notes) = &item.notes {
        output.push_str(&format!("  Notes:   {}\n", notes));
    }

    if !item.tags.is_empty() {
        output.push_str(&format!("  Tags:    {}\n", item.tags.join(", ")));
    }

    output.push_str(&format!(
        "  Added:   {}\n",
        item.created_at.format("%Y-%m-%d")
    ));

    if budget::item_over_budget(all_items, item) {
        output.push_str("\n  Warning: this item's tier is over budget\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemDraft, Money, Tier};

    fn priced(name: &str, tier: Tier, units: i64) -> Item {
        Item::new(ItemDraft {
            name: name.into(),
            tier: Some(tier),
            price: Money::from_units(units),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_list_message() {
        let text = format_item_list(&[], &[], "Rp.");
        assert!(text.contains("No items found"));
    }

    #[test]
    fn test_list_marks_over_budget_items() {
        let items = vec![
            priced("Villa", Tier::Essential, 60_000_000),
            priced("Lamp", Tier::Luxury, 100),
        ];
        let visible: Vec<&Item> = items.iter().collect();

        let text = format_item_list(&visible, &items, "Rp.");
        let villa_line = text.lines().find(|l| l.contains("Villa")).unwrap();
        let lamp_line = text.lines().find(|l| l.contains("Lamp")).unwrap();

        assert!(villa_line.contains("[OVER BUDGET]"));
        assert!(!lamp_line.contains("[OVER BUDGET]"));
        assert!(villa_line.contains("Rp. 60.000.000"));
    }

    #[test]
    fn test_details_show_tier_display_name() {
        let items = vec![priced("Villa", Tier::NiceToHave, 1_000)];
        let text = format_item_details(&items[0], &items, "Rp.");
        assert!(text.contains("Nice-to-Have"));
        assert!(text.contains("itm-"));
        assert!(!text.contains("Warning"));
    }
}
