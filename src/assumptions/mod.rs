//! Scenario assumptions: salary, tax, pension, economic curves
//!
//! All currency amounts are whole units (`i64`). Rates are decimals (0.04 = 4%).

pub mod rates;
pub mod schedule;
pub mod tax;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

pub use rates::{annual_to_monthly_inflation, apy_to_monthly_rate, interpolate_linear, RateCurve};
pub use schedule::applies_this_month;
pub use tax::TaxSchedule;

/// Largest magnitude a currency amount may take, on input and in every projected row.
///
/// One amount per month summed over [`MAX_SUPPORTED_DURATION_MONTHS`] still fits in `i64`.
pub const MAX_CURRENCY_AMOUNT: i64 = 1_000_000_000_000_000;

/// Hard ceiling on projection length, applied on top of the engine's configured maximum
pub const MAX_SUPPORTED_DURATION_MONTHS: u32 = 9_000;

/// Round to the nearest whole currency unit, halves rounding up (-2.5 becomes -2)
///
/// For values already known to be in range; see [`checked_round_currency`] otherwise.
pub fn round_currency(value: f64) -> i64 {
    debug_assert!(
        value.is_finite() && value.abs() < i64::MAX as f64,
        "currency amount out of range: {value}"
    );
    (value + 0.5).floor() as i64
}

/// Half-up rounding that yields `None` outside +/- [`MAX_CURRENCY_AMOUNT`]
pub fn checked_round_currency(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    if rounded.is_finite() && rounded.abs() <= MAX_CURRENCY_AMOUNT as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

/// `Some(value)` when it lies within +/- [`MAX_CURRENCY_AMOUNT`]
pub fn within_currency_range(value: i64) -> Option<i64> {
    (-MAX_CURRENCY_AMOUNT..=MAX_CURRENCY_AMOUNT)
        .contains(&value)
        .then_some(value)
}

/// Assumptions for one scenario, supplied whole for a single projection call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAssumptions {
    /// Calendar date of projection month 1
    pub start_date: NaiveDate,

    /// Number of months to simulate (>= 1)
    pub duration_months: u32,

    pub starting_savings_balance: i64,

    /// Gross monthly salary before tax in month 1
    pub monthly_salary_before_tax: i64,

    /// Salary step increase applied every 12 months
    pub annual_salary_increase_pct: f64,

    /// Month in which the salary is replaced by `new_monthly_salary_before_tax`
    #[serde(default)]
    pub salary_change_month: Option<u32>,

    #[serde(default)]
    pub new_monthly_salary_before_tax: Option<i64>,

    /// Savings APY at the start of the projection
    #[serde(alias = "currentSavingsAPY")]
    pub current_savings_apy: f64,
    /// Savings APY reached at the end of the interest transition
    #[serde(alias = "targetSavingsAPY")]
    pub target_savings_apy: f64,
    pub interest_transition_months: u32,

    pub current_inflation_annual: f64,
    pub target_inflation_annual: f64,
    pub inflation_transition_months: u32,

    /// Share of gross salary paid into pension (0.08 = 8%)
    pub pension_pct: f64,

    /// Monthly amount deducted from income before tax
    pub personal_allowance_monthly: i64,

    pub bracket1_limit: i64,
    pub bracket2_limit: i64,
    pub bracket1_rate: f64,
    pub bracket2_rate: f64,
    pub bracket3_rate: f64,

    /// When set, expense step increases also include the month's annual inflation
    #[serde(default)]
    pub inflation_impacts_expenses: bool,
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            duration_months: 60,
            starting_savings_balance: 1_500_000,
            monthly_salary_before_tax: 900_000,
            annual_salary_increase_pct: 0.04,
            salary_change_month: Some(25),
            new_monthly_salary_before_tax: Some(980_000),
            current_savings_apy: 0.0675,
            target_savings_apy: 0.035,
            interest_transition_months: 24,
            current_inflation_annual: 0.055,
            target_inflation_annual: 0.028,
            inflation_transition_months: 24,
            pension_pct: 0.08,
            personal_allowance_monthly: 60_000,
            bracket1_limit: 350_000,
            bracket2_limit: 900_000,
            bracket1_rate: 0.31,
            bracket2_rate: 0.37,
            bracket3_rate: 0.46,
            inflation_impacts_expenses: false,
        }
    }
}

impl ScenarioAssumptions {
    pub fn tax_schedule(&self) -> TaxSchedule {
        TaxSchedule {
            bracket1_limit: self.bracket1_limit,
            bracket2_limit: self.bracket2_limit,
            rate1: self.bracket1_rate,
            rate2: self.bracket2_rate,
            rate3: self.bracket3_rate,
        }
    }

    pub fn inflation_curve(&self) -> RateCurve {
        RateCurve::new(
            self.current_inflation_annual,
            self.target_inflation_annual,
            self.inflation_transition_months,
        )
    }

    pub fn interest_curve(&self) -> RateCurve {
        RateCurve::new(
            self.current_savings_apy,
            self.target_savings_apy,
            self.interest_transition_months,
        )
    }

    /// One-time salary change, active only when both month and a positive amount
    /// are configured. A new salary of zero or less leaves the change disabled.
    pub fn salary_change(&self) -> Option<(u32, i64)> {
        match (self.salary_change_month, self.new_monthly_salary_before_tax) {
            (Some(month), Some(salary)) if salary > 0 => Some((month, salary)),
            _ => None,
        }
    }

    /// Check every assumption before any month is simulated
    pub fn validate(&self, max_duration_months: u32) -> Result<()> {
        if self.duration_months == 0 {
            return Err(ProjectionError::InvalidDuration(self.duration_months));
        }
        let max_duration_months = max_duration_months.min(MAX_SUPPORTED_DURATION_MONTHS);
        if self.duration_months > max_duration_months {
            return Err(ProjectionError::DurationTooLong {
                requested: self.duration_months,
                max: max_duration_months,
            });
        }

        for (field, value) in [
            ("startingSavingsBalance", Some(self.starting_savings_balance)),
            ("monthlySalaryBeforeTax", Some(self.monthly_salary_before_tax)),
            ("newMonthlySalaryBeforeTax", self.new_monthly_salary_before_tax),
            ("personalAllowanceMonthly", Some(self.personal_allowance_monthly)),
            ("bracket1Limit", Some(self.bracket1_limit)),
            ("bracket2Limit", Some(self.bracket2_limit)),
        ] {
            if let Some(value) = value {
                check_amount(field, value)?;
            }
        }

        // Growth rates feed (1 + r)^(1/12) and (1 + r) multipliers
        for (field, value) in [
            ("annualSalaryIncreasePct", self.annual_salary_increase_pct),
            ("currentSavingsApy", self.current_savings_apy),
            ("targetSavingsApy", self.target_savings_apy),
            ("currentInflationAnnual", self.current_inflation_annual),
            ("targetInflationAnnual", self.target_inflation_annual),
        ] {
            check_growth_rate(field, value)?;
        }

        if !(0.0..=1.0).contains(&self.pension_pct) {
            return Err(ProjectionError::InvalidRate {
                field: "pensionPct".to_string(),
                value: self.pension_pct,
            });
        }

        if self.salary_change_month == Some(0) {
            return Err(ProjectionError::InvalidMonth {
                field: "salaryChangeMonth".to_string(),
                message: "months are numbered from 1".to_string(),
            });
        }

        self.tax_schedule().validate()?;

        if crate::calendar::month_date(self.start_date, self.duration_months).is_none() {
            return Err(ProjectionError::DateOutOfRange {
                start: self.start_date,
                months: self.duration_months,
            });
        }

        Ok(())
    }
}

pub(crate) fn check_amount(field: &str, value: i64) -> Result<()> {
    if within_currency_range(value).is_none() {
        return Err(ProjectionError::InvalidAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Finite and above -100%, so compounding stays defined
pub(crate) fn check_growth_rate(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= -1.0 {
        return Err(ProjectionError::InvalidRate {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
