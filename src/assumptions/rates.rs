//! Economic rate curves: linear transitions from current to target annual rates
//!
//! Inflation and savings interest each follow their own curve with an independent
//! transition length. Annual rates are converted to monthly rates by compounding,
//! never by dividing by 12.

/// Linear interpolation from `start` to `end` over `total_steps` steps.
///
/// Step 0 yields exactly `start` and step `total_steps - 1` exactly `end`.
/// Steps past the window stay clamped at `end`. With `total_steps <= 1`
/// there is no transition and `end` applies from the first step.
pub fn interpolate_linear(start: f64, end: f64, step_index: u32, total_steps: u32) -> f64 {
    if total_steps <= 1 {
        return end;
    }
    let last_step = total_steps - 1;
    let clamped = step_index.min(last_step);
    if clamped == last_step {
        return end;
    }
    let fraction = f64::from(clamped) / f64::from(last_step);
    start + (end - start) * fraction
}

/// Convert an annual percentage yield to the equivalent monthly rate: (1 + apy)^(1/12) - 1
pub fn apy_to_monthly_rate(apy: f64) -> f64 {
    (1.0 + apy).powf(1.0 / 12.0) - 1.0
}

/// Convert annual inflation to the equivalent monthly inflation: (1 + annual)^(1/12) - 1
pub fn annual_to_monthly_inflation(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

/// An annual rate moving linearly from `current` to `target` over `transition_months`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCurve {
    pub current: f64,
    pub target: f64,
    pub transition_months: u32,
}

impl RateCurve {
    pub fn new(current: f64, target: f64, transition_months: u32) -> Self {
        Self {
            current,
            target,
            transition_months,
        }
    }

    /// Annual rate in effect for a 1-based projection month
    pub fn annual_rate(&self, month_index: u32) -> f64 {
        interpolate_linear(
            self.current,
            self.target,
            month_index.saturating_sub(1),
            self.transition_months,
        )
    }

    /// Annual rate for the month and its compounded monthly equivalent
    pub fn rates_for_month(&self, month_index: u32) -> (f64, f64) {
        let annual = self.annual_rate(month_index);
        (annual, apy_to_monthly_rate(annual))
    }
}
