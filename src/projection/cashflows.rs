//! Monthly projection rows and results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    /// 1-based month of the projection
    pub month_index: u32,
    #[serde(with = "crate::calendar::display_date")]
    pub date: NaiveDate,

    // Income
    /// Salary plus income events
    pub gross_salary: i64,
    pub pension: i64,
    pub tax: i64,
    pub net_salary: i64,

    // Outflows and savings
    pub expenses: i64,
    /// Net salary minus expenses; negative when the month draws on savings
    pub savings_deposit: i64,

    // Rates in effect this month
    pub interest_rate_annual: f64,
    pub interest_rate_monthly: f64,
    pub inflation_rate_annual: f64,
    pub inflation_rate_monthly: f64,

    /// Nominal balance after deposit and interest
    pub savings_balance: i64,

    // Deflated by the cumulative inflation index
    pub real_savings_balance: i64,
    pub real_net_salary: i64,
    pub real_expenses: i64,

    /// Interest earned from month 1 through this month
    pub total_interest_earned: i64,
    /// Product of (1 + monthly inflation) from month 1 through this month
    pub cumulative_inflation_index: f64,
}

/// Complete projection for one scenario, rows in month order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub scenario_id: String,
    pub scenario_name: String,
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn first_row(&self) -> Option<&ProjectionRow> {
        self.rows.first()
    }

    pub fn last_row(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }
}
