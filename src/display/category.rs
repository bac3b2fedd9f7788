//! Category display formatting

use crate::models::ExpenseCategory;

/// Format the closed category set as a table
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<4} {:<15} {}\n", "", "Category", "Key"));
    output.push_str(&format!("{:-<4} {:-<15} {:-<15}\n", "", "", ""));

    for category in ExpenseCategory::all() {
        output.push_str(&format!(
            "{:<4} {:<15} {}\n",
            category.emoji(),
            category.title(),
            category.title().to_lowercase(),
        ));
    }

    output
}
