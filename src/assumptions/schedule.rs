//! Annual step cadence shared by salary, recurring income and expense increases
//!
//! Steps are anchored to the scenario start, not to calendar years:
//! months 13, 25, 37, ... regardless of the start date.

/// Months between annual steps
pub const MONTHS_PER_STEP: u32 = 12;

/// Whether annual step increases apply in a 1-based projection month
pub fn applies_this_month(month_index: u32) -> bool {
    month_index > 1 && (month_index - 1) % MONTHS_PER_STEP == 0
}

/// Apply one annual step increase to an amount, rounded to whole currency.
/// `None` once the stepped amount leaves the supported currency range.
pub fn step_up(amount: i64, annual_increase_pct: f64) -> Option<i64> {
    super::checked_round_currency(amount as f64 * (1.0 + annual_increase_pct))
}
