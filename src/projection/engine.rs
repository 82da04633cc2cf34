//! Monthly projection engine

use log::{debug, trace};

use super::cashflows::{ProjectionResult, ProjectionRow};
use super::state::ProjectionState;
use super::DEFAULT_MAX_DURATION_MONTHS;
use crate::assumptions::{
    annual_to_monthly_inflation, apy_to_monthly_rate, round_currency, within_currency_range,
};
use crate::calendar;
use crate::error::{ProjectionError, Result};
use crate::scenario::ScenarioInput;

/// Engine-level settings shared by every projection it runs
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Longest projection accepted; bounds the O(months x items) cost per call
    pub max_duration_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_duration_months: DEFAULT_MAX_DURATION_MONTHS,
        }
    }
}

/// Deterministic month-by-month projection of a scenario
///
/// The engine holds no per-scenario state: every call to [`project_scenario`]
/// starts from a fresh [`ProjectionState`], so one engine can be shared across
/// threads and identical inputs always produce identical results.
///
/// [`project_scenario`]: ProjectionEngine::project_scenario
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a scenario over its full duration
    ///
    /// The input is validated in full first; an invalid scenario returns an
    /// error without producing any rows.
    pub fn project_scenario(&self, scenario: &ScenarioInput) -> Result<ProjectionResult> {
        scenario.validate(self.config.max_duration_months)?;

        let months = scenario.assumptions.duration_months;
        debug!(
            "Projecting scenario {} ({}) over {} months with {} expense items and {} income events",
            scenario.id,
            scenario.name,
            months,
            scenario.expense_items.len(),
            scenario.income_events.len()
        );

        let mut state = ProjectionState::new(scenario);
        let mut rows = Vec::with_capacity(months as usize);
        for month_index in 1..=months {
            rows.push(self.project_month(scenario, &mut state, month_index)?);
        }

        debug!(
            "Scenario {} final balance {} after {} months",
            scenario.id, state.savings_balance, months
        );

        Ok(ProjectionResult {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            rows,
        })
    }

    /// Compute one month and advance the running state
    fn project_month(
        &self,
        scenario: &ScenarioInput,
        state: &mut ProjectionState,
        month_index: u32,
    ) -> Result<ProjectionRow> {
        let assumptions = &scenario.assumptions;

        let date = calendar::month_date(assumptions.start_date, month_index).ok_or(
            ProjectionError::DateOutOfRange {
                start: assumptions.start_date,
                months: month_index,
            },
        )?;

        // Economic curves for this month
        let inflation_annual = assumptions.inflation_curve().annual_rate(month_index);
        let interest_annual = assumptions.interest_curve().annual_rate(month_index);
        let inflation_monthly = annual_to_monthly_inflation(inflation_annual);
        let interest_monthly = apy_to_monthly_rate(interest_annual);

        let overflow = |field: &'static str| ProjectionError::Overflow {
            scenario_id: scenario.id.clone(),
            field,
            month: month_index,
        };

        // Income, pension and tax
        let salary = state
            .resolve_salary(month_index, assumptions)
            .ok_or_else(|| overflow("salary"))?;
        let income_events = state
            .resolve_income_events(month_index, &scenario.income_events)
            .ok_or_else(|| overflow("income events"))?;
        let gross_salary = salary
            .checked_add(income_events)
            .and_then(within_currency_range)
            .ok_or_else(|| overflow("gross salary"))?;
        // Pension and tax rates are within [0, 1], so neither can exceed gross
        let pension = round_currency(gross_salary as f64 * assumptions.pension_pct);
        let taxable = (gross_salary - pension - assumptions.personal_allowance_monthly).max(0);
        let tax = assumptions.tax_schedule().compute_tax(taxable);
        let net_salary = gross_salary - pension - tax;

        // Expenses and savings
        let expenses = state
            .resolve_expenses(
                month_index,
                &scenario.expense_items,
                inflation_annual,
                assumptions.inflation_impacts_expenses,
            )
            .ok_or_else(|| overflow("expenses"))?;
        let savings_deposit = within_currency_range(net_salary - expenses)
            .ok_or_else(|| overflow("savings deposit"))?;
        let interest_earned = state
            .apply_deposit(savings_deposit, interest_monthly)
            .ok_or_else(|| overflow("savings balance"))?;

        state.apply_inflation(inflation_monthly);
        let deflate = |nominal: i64| state.deflate(nominal).ok_or_else(|| overflow("real amounts"));

        trace!(
            "Scenario {} month {}: gross={} tax={} expenses={} deposit={} interest={} balance={}",
            scenario.id,
            month_index,
            gross_salary,
            tax,
            expenses,
            savings_deposit,
            interest_earned,
            state.savings_balance
        );

        Ok(ProjectionRow {
            month_index,
            date,
            gross_salary,
            pension,
            tax,
            net_salary,
            expenses,
            savings_deposit,
            interest_rate_annual: interest_annual,
            interest_rate_monthly: interest_monthly,
            inflation_rate_annual: inflation_annual,
            inflation_rate_monthly: inflation_monthly,
            savings_balance: state.savings_balance,
            real_savings_balance: deflate(state.savings_balance)?,
            real_net_salary: deflate(net_salary)?,
            real_expenses: deflate(expenses)?,
            total_interest_earned: state.total_interest_earned,
            cumulative_inflation_index: state.cumulative_inflation_index,
        })
    }
}
