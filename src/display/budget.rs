//! Budget summary display formatting

use crate::services::TierSummary;

/// Format the per-tier budget summary block
pub fn format_budget_summary(summaries: &[TierSummary], currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Budget Summary\n");
    output.push_str("==============\n");

    for summary in summaries {
        output.push('\n');
        output.push_str(&format!("{}\n", summary.tier.display_name()));
        output.push_str(&format!(
            "  Spent: {} of {}\n",
            summary.spent.format_with_symbol(currency),
            summary.limit().format_with_symbol(currency)
        ));

        if summary.is_over_budget() {
            output.push_str(&format!(
                "  Over budget: {}\n",
                summary.overrun().format_with_symbol(currency)
            ));
        } else {
            output.push_str(&format!(
                "  Remaining: {}\n",
                summary.remaining().format_with_symbol(currency)
            ));
        }
    }

    output
}
