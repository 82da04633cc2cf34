//! Scenario-level totals derived from a finished projection

use serde::{Deserialize, Serialize};

use super::cashflows::ProjectionResult;
use crate::assumptions::round_currency;

/// Aggregate statistics for one projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub scenario_id: String,
    pub scenario_name: String,
    pub starting_savings_balance: i64,
    pub total_savings_deposits: i64,
    pub total_interest_earned: i64,
    pub final_savings_balance: i64,
    pub total_expenses: i64,
    pub average_monthly_savings: i64,
    pub total_gross_salary: i64,
    pub total_pension: i64,
    pub total_tax: i64,
}

impl SummaryResult {
    /// Labelled metrics in export order
    pub fn metrics(&self) -> [(&'static str, i64); 9] {
        [
            ("Starting balance", self.starting_savings_balance),
            ("Total deposits", self.total_savings_deposits),
            ("Total interest", self.total_interest_earned),
            ("Final balance", self.final_savings_balance),
            ("Total expenses", self.total_expenses),
            ("Average monthly savings", self.average_monthly_savings),
            ("Total gross salary", self.total_gross_salary),
            ("Total pension", self.total_pension),
            ("Total tax", self.total_tax),
        ]
    }
}

/// Reduce a projection to its summary
///
/// The starting balance is recovered from the first row as balance minus
/// deposit. Total interest is the last row's running total rather than a
/// re-summation.
pub fn summarize(projection: &ProjectionResult) -> SummaryResult {
    let rows = &projection.rows;

    let starting_savings_balance = projection
        .first_row()
        .map(|row| row.savings_balance - row.savings_deposit)
        .unwrap_or(0);
    let total_savings_deposits: i64 = rows.iter().map(|row| row.savings_deposit).sum();
    let total_interest_earned = projection.last_row().map(|row| row.total_interest_earned).unwrap_or(0);
    let final_savings_balance = projection.last_row().map(|row| row.savings_balance).unwrap_or(0);
    let average_monthly_savings = if rows.is_empty() {
        0
    } else {
        round_currency(total_savings_deposits as f64 / rows.len() as f64)
    };

    SummaryResult {
        scenario_id: projection.scenario_id.clone(),
        scenario_name: projection.scenario_name.clone(),
        starting_savings_balance,
        total_savings_deposits,
        total_interest_earned,
        final_savings_balance,
        total_expenses: rows.iter().map(|row| row.expenses).sum(),
        average_monthly_savings,
        total_gross_salary: rows.iter().map(|row| row.gross_salary).sum(),
        total_pension: rows.iter().map(|row| row.pension).sum(),
        total_tax: rows.iter().map(|row| row.tax).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionRow;
    use chrono::NaiveDate;

    fn row(month_index: u32, deposit: i64, balance: i64, total_interest: i64) -> ProjectionRow {
        ProjectionRow {
            month_index,
            date: NaiveDate::from_ymd_opt(2024, month_index, 1).unwrap(),
            gross_salary: 500_000,
            pension: 40_000,
            tax: 127_000,
            net_salary: 333_000,
            expenses: 333_000 - deposit,
            savings_deposit: deposit,
            interest_rate_annual: 0.06,
            interest_rate_monthly: 0.0048,
            inflation_rate_annual: 0.0,
            inflation_rate_monthly: 0.0,
            savings_balance: balance,
            real_savings_balance: balance,
            real_net_salary: 333_000,
            real_expenses: 333_000 - deposit,
            total_interest_earned: total_interest,
            cumulative_inflation_index: 1.0,
        }
    }

    fn projection(rows: Vec<ProjectionRow>) -> ProjectionResult {
        ProjectionResult {
            scenario_id: "s1".to_string(),
            scenario_name: "Summary".to_string(),
            rows,
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = summarize(&projection(vec![
            row(1, 100_000, 1_100_500, 500),
            row(2, 50_001, 1_151_200, 1_199),
            row(3, -20_000, 1_136_800, 1_799),
        ]));

        assert_eq!(summary.starting_savings_balance, 1_000_500);
        assert_eq!(summary.total_savings_deposits, 130_001);
        assert_eq!(summary.total_interest_earned, 1_799);
        assert_eq!(summary.final_savings_balance, 1_136_800);
        assert_eq!(summary.total_expenses, 3 * 333_000 - 130_001);
        // 130001 / 3 = 43333.67
        assert_eq!(summary.average_monthly_savings, 43_334);
        assert_eq!(summary.total_gross_salary, 1_500_000);
        assert_eq!(summary.total_pension, 120_000);
        assert_eq!(summary.total_tax, 381_000);
    }

    #[test]
    fn test_empty_projection() {
        let summary = summarize(&projection(Vec::new()));
        assert_eq!(summary.starting_savings_balance, 0);
        assert_eq!(summary.total_interest_earned, 0);
        assert_eq!(summary.final_savings_balance, 0);
        assert_eq!(summary.average_monthly_savings, 0);
        assert_eq!(summary.scenario_id, "s1");
    }

    #[test]
    fn test_metric_order() {
        let summary = summarize(&projection(vec![row(1, 100_000, 1_100_500, 500)]));
        let labels: Vec<&str> = summary.metrics().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Starting balance",
                "Total deposits",
                "Total interest",
                "Final balance",
                "Total expenses",
                "Average monthly savings",
                "Total gross salary",
                "Total pension",
                "Total tax",
            ]
        );
        assert_eq!(summary.metrics()[3].1, 1_100_500);
    }
}
