//! Spending streak
//!
//! Counts consecutive calendar days, walking backward from a given day, on
//! which at least one expense was recorded. The walk stops at the first day
//! without an expense, so a day without any logged spending resets the
//! streak to zero.

use chrono::NaiveDate;

use crate::models::Expense;

/// Consecutive days with at least one expense, ending at `today`
///
/// If `today` itself has no expense the streak is 0, no matter what earlier
/// days look like.
pub fn spending_streak(expenses: &[Expense], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    loop {
        if !expenses.iter().any(|e| e.date.date() == day) {
            break;
        }
        streak += 1;
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    fn expense_on(date: NaiveDate) -> Expense {
        Expense::new(
            "test",
            Money::from_cents(100),
            ExpenseCategory::Coffee,
            date.and_hms_opt(8, 0, 0).unwrap(),
        )
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_three_day_streak() {
        // Expenses on today, today-1, today-2; none on today-3
        let expenses = vec![expense_on(day(10)), expense_on(day(9)), expense_on(day(8))];
        assert_eq!(spending_streak(&expenses, day(10)), 3);
    }

    #[test]
    fn test_no_expense_today_means_zero() {
        let expenses = vec![expense_on(day(9))];
        assert_eq!(spending_streak(&expenses, day(10)), 0);
    }

    #[test]
    fn test_gap_breaks_streak() {
        // today and today-2, but not today-1
        let expenses = vec![expense_on(day(10)), expense_on(day(8))];
        assert_eq!(spending_streak(&expenses, day(10)), 1);
    }

    #[test]
    fn test_multiple_expenses_per_day_count_once() {
        let expenses = vec![
            expense_on(day(10)),
            expense_on(day(10)),
            expense_on(day(9)),
        ];
        assert_eq!(spending_streak(&expenses, day(10)), 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let expenses = vec![
            expense_on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            expense_on(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()),
            expense_on(NaiveDate::from_ymd_opt(2025, 2, 27).unwrap()),
        ];
        assert_eq!(
            spending_streak(&expenses, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            3
        );
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(spending_streak(&[], day(10)), 0);
    }
}
