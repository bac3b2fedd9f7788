//! Expense display formatting

use crate::models::Expense;

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let title_width = expenses
        .iter()
        .map(|e| e.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<title_width$}  {:<15}  {:>10}  {}\n",
        "ID",
        "Date",
        "Title",
        "Category",
        "Amount",
        "Flag",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<title_width$}  {:-<15}  {:->10}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<title_width$}  {:<15}  {:>10}  {}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d"),
            expense.title,
            format!("{} {}", expense.category.emoji(), expense.category.title()),
            expense.amount.to_string(),
            if expense.unnecessary { "!" } else { "" },
            title_width = title_width,
        ));
    }

    output
}
