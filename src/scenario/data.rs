//! Scenario input structures and boundary validation

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assumptions::{check_amount, check_growth_rate, ScenarioAssumptions};
use crate::error::{ProjectionError, Result};

/// A recurring monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub name: String,

    pub monthly_amount: i64,

    /// First month the expense is paid (1-based)
    #[serde(default = "default_starts_month")]
    pub starts_month: u32,

    /// Last month the expense is paid, inclusive; open-ended when absent
    #[serde(default)]
    pub ends_month: Option<u32>,

    #[serde(default)]
    pub annual_increase_pct: f64,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_starts_month() -> u32 { 1 }
fn default_enabled() -> bool { true }

impl ExpenseItem {
    /// Enabled and inside its start/end window for the month
    pub fn is_active(&self, month_index: u32) -> bool {
        self.enabled
            && month_index >= self.starts_month
            && self.ends_month.map_or(true, |end| month_index <= end)
    }
}

/// Extra income on top of salary: a one-off payment or a recurring amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEvent {
    pub name: String,

    /// Month of the payment, or first month of a recurring event
    pub month: u32,

    pub amount: i64,

    #[serde(default)]
    pub recurring: bool,

    /// Step increase for recurring events; ignored otherwise
    #[serde(default)]
    pub annual_increase_pct: f64,
}

/// One complete scenario handed to the projection engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub id: String,
    pub name: String,
    pub assumptions: ScenarioAssumptions,
    #[serde(default)]
    pub expense_items: Vec<ExpenseItem>,
    #[serde(default)]
    pub income_events: Vec<IncomeEvent>,
}

impl ScenarioInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>, assumptions: ScenarioAssumptions) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assumptions,
            expense_items: Vec::new(),
            income_events: Vec::new(),
        }
    }

    pub fn with_expense(mut self, item: ExpenseItem) -> Self {
        self.expense_items.push(item);
        self
    }

    pub fn with_income_event(mut self, event: IncomeEvent) -> Self {
        self.income_events.push(event);
        self
    }

    /// Validate the whole input. Runs before any month is projected.
    pub fn validate(&self, max_duration_months: u32) -> Result<()> {
        self.assumptions.validate(max_duration_months)?;

        for item in &self.expense_items {
            if item.starts_month == 0 {
                return Err(ProjectionError::InvalidMonth {
                    field: format!("expense '{}' startsMonth", item.name),
                    message: "months are numbered from 1".to_string(),
                });
            }
            if let Some(end) = item.ends_month {
                if end < item.starts_month {
                    return Err(ProjectionError::InvalidMonth {
                        field: format!("expense '{}' endsMonth", item.name),
                        message: format!("ends in month {} before starting in month {}", end, item.starts_month),
                    });
                }
            }
            check_amount(&format!("expense '{}' monthlyAmount", item.name), item.monthly_amount)?;
            check_growth_rate(&format!("expense '{}' annualIncreasePct", item.name), item.annual_increase_pct)?;
        }

        for event in &self.income_events {
            if event.month == 0 {
                return Err(ProjectionError::InvalidMonth {
                    field: format!("income event '{}' month", event.name),
                    message: "months are numbered from 1".to_string(),
                });
            }
            check_amount(&format!("income event '{}' amount", event.name), event.amount)?;
            if event.recurring {
                check_growth_rate(&format!("income event '{}' annualIncreasePct", event.name), event.annual_increase_pct)?;
            }
        }

        warn_duplicate_names(&self.id, "expense item", self.expense_items.iter().map(|i| i.name.as_str()));
        warn_duplicate_names(&self.id, "income event", self.income_events.iter().map(|e| e.name.as_str()));

        Ok(())
    }
}

/// Items are tracked by position, so duplicates still project independently
fn warn_duplicate_names<'a>(scenario_id: &str, kind: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            warn!("Scenario {}: duplicate {} name '{}'", scenario_id, kind, name);
        }
    }
}
