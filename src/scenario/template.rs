//! Built-in demo scenarios
//!
//! Two otherwise identical five-year plans that differ only in whether
//! inflation feeds into expense growth.

use super::{ExpenseItem, IncomeEvent, ScenarioInput};
use crate::assumptions::ScenarioAssumptions;

pub const BASELINE_ID: &str = "baseline";
pub const INFLATION_EXPENSES_ID: &str = "inflation-expenses";

/// Household expenses shared by both demo scenarios
/// Format: (name, monthly amount, annual increase)
const DEMO_EXPENSES: &[(&str, i64, f64)] = &[
    ("Rent", 280_000, 0.03),
    ("Utilities", 38_000, 0.02),
    ("Groceries", 75_000, 0.025),
    ("Transport", 40_000, 0.02),
];

fn demo_scenario(id: &str, name: &str, inflation_impacts_expenses: bool) -> ScenarioInput {
    let assumptions = ScenarioAssumptions {
        inflation_impacts_expenses,
        ..ScenarioAssumptions::default()
    };

    let mut scenario = ScenarioInput::new(id, name, assumptions);
    for &(expense_name, monthly_amount, annual_increase_pct) in DEMO_EXPENSES {
        scenario = scenario.with_expense(ExpenseItem {
            name: expense_name.to_string(),
            monthly_amount,
            starts_month: 1,
            ends_month: None,
            annual_increase_pct,
            enabled: true,
        });
    }

    scenario.with_income_event(IncomeEvent {
        name: "One-time bonus".to_string(),
        month: 6,
        amount: 250_000,
        recurring: false,
        annual_increase_pct: 0.0,
    })
}

/// The demo scenario pair, baseline first
pub fn demo_scenarios() -> Vec<ScenarioInput> {
    vec![
        demo_scenario(BASELINE_ID, "Baseline - Inflation does not impact expenses", false),
        demo_scenario(INFLATION_EXPENSES_ID, "Inflation impacts expenses", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scenarios() {
        let scenarios = demo_scenarios();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, BASELINE_ID);
        assert!(!scenarios[0].assumptions.inflation_impacts_expenses);
        assert!(scenarios[1].assumptions.inflation_impacts_expenses);

        for scenario in &scenarios {
            assert_eq!(scenario.expense_items.len(), 4);
            assert_eq!(scenario.income_events.len(), 1);
            assert!(scenario.validate(1200).is_ok());
        }

        let monthly: i64 = scenarios[0].expense_items.iter().map(|e| e.monthly_amount).sum();
        assert_eq!(monthly, 433_000);
    }
}
