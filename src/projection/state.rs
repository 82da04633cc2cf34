//! Running state carried from month to month within one projection

use crate::assumptions::schedule::{applies_this_month, step_up};
use crate::assumptions::{checked_round_currency, within_currency_range, ScenarioAssumptions};
use crate::scenario::{ExpenseItem, IncomeEvent, ScenarioInput};

/// Mutable state for a single projection call
///
/// Expense and income tracks are indexed by item position in the scenario, so
/// two items sharing a name still step independently. A track is seeded from
/// the item's base amount the first month it is active and afterwards always
/// steps from its last adjusted value.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current monthly salary level, before income events
    pub salary: i64,
    pub savings_balance: i64,
    pub total_interest_earned: i64,
    pub cumulative_inflation_index: f64,
    expense_amounts: Vec<Option<i64>>,
    event_amounts: Vec<Option<i64>>,
}

impl ProjectionState {
    pub fn new(scenario: &ScenarioInput) -> Self {
        Self {
            salary: scenario.assumptions.monthly_salary_before_tax,
            savings_balance: scenario.assumptions.starting_savings_balance,
            total_interest_earned: 0,
            cumulative_inflation_index: 1.0,
            expense_amounts: vec![None; scenario.expense_items.len()],
            event_amounts: vec![None; scenario.income_events.len()],
        }
    }

    /// Salary for the month.
    ///
    /// The one-time change replaces the running salary first; a step increase in
    /// the same month then compounds on the replaced value.
    pub fn resolve_salary(&mut self, month_index: u32, assumptions: &ScenarioAssumptions) -> Option<i64> {
        if let Some((change_month, new_salary)) = assumptions.salary_change() {
            if change_month == month_index {
                self.salary = new_salary;
            }
        }
        if applies_this_month(month_index) {
            self.salary = step_up(self.salary, assumptions.annual_salary_increase_pct)?;
        }
        Some(self.salary)
    }

    /// Total income from events paid this month
    pub fn resolve_income_events(&mut self, month_index: u32, events: &[IncomeEvent]) -> Option<i64> {
        let mut total: i64 = 0;
        for (idx, event) in events.iter().enumerate() {
            if event.recurring {
                if month_index < event.month {
                    continue;
                }
                let mut amount = self.event_amounts[idx].unwrap_or(event.amount);
                if applies_this_month(month_index) {
                    amount = step_up(amount, event.annual_increase_pct)?;
                }
                self.event_amounts[idx] = Some(amount);
                total = total.checked_add(amount)?;
            } else if event.month == month_index {
                total = total.checked_add(event.amount)?;
            }
        }
        within_currency_range(total)
    }

    /// Total of active expenses this month
    ///
    /// With `inflation_impacts_expenses`, the step increase is the item's own
    /// increase plus the month's annual inflation rate.
    pub fn resolve_expenses(
        &mut self,
        month_index: u32,
        items: &[ExpenseItem],
        inflation_annual: f64,
        inflation_impacts_expenses: bool,
    ) -> Option<i64> {
        let mut total: i64 = 0;
        for (idx, item) in items.iter().enumerate() {
            if !item.is_active(month_index) {
                continue;
            }
            let mut amount = self.expense_amounts[idx].unwrap_or(item.monthly_amount);
            if applies_this_month(month_index) {
                let effective_increase = if inflation_impacts_expenses {
                    item.annual_increase_pct + inflation_annual
                } else {
                    item.annual_increase_pct
                };
                amount = step_up(amount, effective_increase)?;
            }
            self.expense_amounts[idx] = Some(amount);
            total = total.checked_add(amount)?;
        }
        within_currency_range(total)
    }

    /// Deposit into savings, then earn a month's interest on the post-deposit balance.
    /// Returns the interest earned, or `None` without touching the state when the
    /// balance would leave the supported range.
    pub fn apply_deposit(&mut self, deposit: i64, interest_monthly: f64) -> Option<i64> {
        let pre_interest_balance = self.savings_balance.checked_add(deposit)?;
        let interest_earned = checked_round_currency(pre_interest_balance as f64 * interest_monthly)?;
        let balance = within_currency_range(pre_interest_balance.checked_add(interest_earned)?)?;
        let total_interest_earned = within_currency_range(self.total_interest_earned.checked_add(interest_earned)?)?;

        self.savings_balance = balance;
        self.total_interest_earned = total_interest_earned;
        Some(interest_earned)
    }

    pub fn apply_inflation(&mut self, inflation_monthly: f64) {
        self.cumulative_inflation_index *= 1.0 + inflation_monthly;
    }

    /// Express a nominal amount in start-of-projection purchasing power
    pub fn deflate(&self, nominal: i64) -> Option<i64> {
        checked_round_currency(nominal as f64 / self.cumulative_inflation_index)
    }
}
