//! Monthly summary report
//!
//! Aggregates one calendar month of the ledger: total spending, the
//! unnecessary-spend subtotal, per-category breakdown, and progress against
//! an optional monthly spending limit.

use crate::models::{Expense, ExpenseCategory, Money, MonthPeriod};

/// Number of entries shown by the recent-expenses view
pub const RECENT_COUNT: usize = 5;

/// All expenses whose date falls in the given calendar month
pub fn month_expenses(expenses: &[Expense], period: MonthPeriod) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| period.contains(e.date.date()))
        .cloned()
        .collect()
}

/// The most recently dated expenses across the full ledger
///
/// Not month-scoped; sorted by date descending (stable, so same-date entries
/// keep their ledger order).
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Progress of a month's spending against a monthly limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitProgress {
    /// No positive limit is configured
    NoLimit,
    /// Fraction of the limit spent, clamped to 1.0
    Ratio(f64),
}

impl LimitProgress {
    /// Compute limit progress for a month total
    pub fn compute(month_total: Money, limit: Option<Money>) -> Self {
        match limit {
            Some(limit) if limit.is_positive() => {
                let ratio = month_total.ratio_of(limit).unwrap_or(0.0);
                Self::Ratio(ratio.min(1.0))
            }
            _ => Self::NoLimit,
        }
    }

    /// The ratio, if a limit is set
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::NoLimit => None,
            Self::Ratio(r) => Some(*r),
        }
    }
}

/// Spending total for one category within the month
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    pub expense_count: usize,
    /// Share of the month total, in percent
    pub percentage: f64,
}

/// Monthly summary report
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The month this summary covers
    pub period: MonthPeriod,
    /// Sum of all expenses in the month
    pub total: Money,
    /// Sum of expenses flagged as unnecessary
    pub unnecessary_total: Money,
    /// Number of expenses in the month
    pub expense_count: usize,
    /// Progress against the monthly limit, if one is set
    pub limit_progress: LimitProgress,
    /// Per-category totals, sorted by total descending; categories without
    /// expenses this month are omitted
    pub categories: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Generate the summary for a month of the ledger
    pub fn generate(expenses: &[Expense], period: MonthPeriod, limit: Option<Money>) -> Self {
        let in_month = month_expenses(expenses, period);

        let total: Money = in_month.iter().map(|e| e.amount).sum();
        let unnecessary_total: Money = in_month
            .iter()
            .filter(|e| e.unnecessary)
            .map(|e| e.amount)
            .sum();

        // Walk categories in declaration order so equal totals keep a
        // stable, predictable position after the sort.
        let mut categories: Vec<CategoryTotal> = ExpenseCategory::all()
            .iter()
            .filter_map(|&category| {
                let matching: Vec<&Expense> =
                    in_month.iter().filter(|e| e.category == category).collect();
                if matching.is_empty() {
                    return None;
                }

                let cat_total: Money = matching.iter().map(|e| e.amount).sum();
                let percentage = cat_total
                    .ratio_of(total)
                    .map(|r| r * 100.0)
                    .unwrap_or(0.0);

                Some(CategoryTotal {
                    category,
                    total: cat_total,
                    expense_count: matching.len(),
                    percentage,
                })
            })
            .collect();

        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            period,
            total,
            unnecessary_total,
            expense_count: in_month.len(),
            limit_progress: LimitProgress::compute(total, limit),
            categories,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary for {}\n", self.period));
        output.push_str(&"=".repeat(46));
        output.push('\n');
        output.push_str(&format!(
            "Total spent:        {} ({} expenses)\n",
            self.total, self.expense_count
        ));
        output.push_str(&format!(
            "Unnecessary spend:  {}\n",
            self.unnecessary_total
        ));

        match self.limit_progress {
            LimitProgress::NoLimit => {
                output.push_str("Monthly limit:      not set\n");
            }
            LimitProgress::Ratio(ratio) => {
                let filled = (ratio * 20.0).round() as usize;
                output.push_str(&format!(
                    "Monthly limit:      [{}{}] {:.0}%\n",
                    "#".repeat(filled),
                    "-".repeat(20 - filled),
                    ratio * 100.0
                ));
            }
        }

        if !self.categories.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>10} {:>7} {:>7}\n",
                "Category", "Total", "Count", "%"
            ));
            output.push_str(&"-".repeat(46));
            output.push('\n');

            for row in &self.categories {
                output.push_str(&format!(
                    "{} {:<17} {:>10} {:>7} {:>6.1}%\n",
                    row.category.emoji(),
                    row.category.title(),
                    row.total.to_string(),
                    row.expense_count,
                    row.percentage
                ));
            }
        }

        output
    }
}
