//! Subscription display formatting

use crate::models::Subscription;

/// Format a list of subscriptions as a table
pub fn format_subscription_list(subscriptions: &[Subscription]) -> String {
    if subscriptions.is_empty() {
        return "No subscriptions defined.\n".to_string();
    }

    let name_width = subscriptions
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>10}  {:>4}  {:<8}  {}\n",
        "ID",
        "Name",
        "Amount",
        "Day",
        "Status",
        "Last charged",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->10}  {:->4}  {:-<8}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for sub in subscriptions {
        let last_charged = sub
            .last_charged
            .map(|instant| instant.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());

        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>10}  {:>4}  {:<8}  {}\n",
            sub.id.to_string(),
            sub.name,
            sub.amount.to_string(),
            sub.billing_day,
            if sub.active { "active" } else { "paused" },
            last_charged,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_subscription_list(&[]), "No subscriptions defined.\n");
    }

    #[test]
    fn test_list_contains_rows() {
        let mut sub = Subscription::new(
            "Netflix",
            Money::from_cents(11999),
            ExpenseCategory::Entertainment,
            5,
        );
        sub.active = false;

        let output = format_subscription_list(&[sub]);
        assert!(output.contains("Netflix"));
        assert!(output.contains("119.99"));
        assert!(output.contains("paused"));
        assert!(output.contains("never"));
    }
}
