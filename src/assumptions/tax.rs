//! Three-tier progressive income tax

use super::round_currency;
use crate::error::{ProjectionError, Result};

/// Monthly tax bracket schedule
///
/// Income up to `bracket1_limit` is taxed at `rate1`, income between the two
/// limits at `rate2`, and everything above `bracket2_limit` at `rate3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSchedule {
    pub bracket1_limit: i64,
    pub bracket2_limit: i64,
    pub rate1: f64,
    pub rate2: f64,
    pub rate3: f64,
}

impl TaxSchedule {
    /// Reject limits that would make the middle tier negative, and rates
    /// outside [0, 1] so tax never exceeds taxable income
    pub fn validate(&self) -> Result<()> {
        if self.bracket1_limit < 0 || self.bracket1_limit >= self.bracket2_limit {
            return Err(ProjectionError::BracketOrder {
                bracket1: self.bracket1_limit,
                bracket2: self.bracket2_limit,
            });
        }
        for (field, value) in [
            ("bracket1Rate", self.rate1),
            ("bracket2Rate", self.rate2),
            ("bracket3Rate", self.rate3),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProjectionError::InvalidRate {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Taxable amount falling into each tier
    pub fn tiers(&self, taxable_income: i64) -> (i64, i64, i64) {
        if taxable_income <= 0 {
            return (0, 0, 0);
        }
        let tier1 = taxable_income.min(self.bracket1_limit);
        let tier2 = (taxable_income - self.bracket1_limit)
            .max(0)
            .min(self.bracket2_limit - self.bracket1_limit);
        let tier3 = (taxable_income - self.bracket2_limit).max(0);
        (tier1, tier2, tier3)
    }

    /// Tax on a month's taxable income, rounded to whole currency
    pub fn compute_tax(&self, taxable_income: i64) -> i64 {
        if taxable_income <= 0 {
            return 0;
        }
        let (tier1, tier2, tier3) = self.tiers(taxable_income);
        let tax = tier1 as f64 * self.rate1 + tier2 as f64 * self.rate2 + tier3 as f64 * self.rate3;
        round_currency(tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> TaxSchedule {
        TaxSchedule {
            bracket1_limit: 300_000,
            bracket2_limit: 700_000,
            rate1: 0.2,
            rate2: 0.3,
            rate3: 0.4,
        }
    }

    #[test]
    fn test_all_three_tiers() {
        // 300000*0.2 + 400000*0.3 + 200000*0.4
        let tax = schedule();
        assert_eq!(tax.tiers(900_000), (300_000, 400_000, 200_000));
        assert_eq!(tax.compute_tax(900_000), 260_000);
    }

    #[test]
    fn test_within_first_tier() {
        let tax = schedule();
        assert_eq!(tax.tiers(100_000), (100_000, 0, 0));
        assert_eq!(tax.compute_tax(100_000), 20_000);
        assert_eq!(tax.compute_tax(300_000), 60_000);
    }

    #[test]
    fn test_bracket_boundaries() {
        let tax = schedule();
        assert_eq!(tax.compute_tax(300_001), 60_000);
        assert_eq!(tax.compute_tax(700_000), 180_000);
        assert_eq!(tax.tiers(700_000), (300_000, 400_000, 0));
    }

    #[test]
    fn test_non_positive_income() {
        let tax = schedule();
        assert_eq!(tax.compute_tax(0), 0);
        assert_eq!(tax.compute_tax(-50_000), 0);
        assert_eq!(tax.tiers(-1), (0, 0, 0));
    }

    #[test]
    fn test_rounding() {
        let tax = TaxSchedule {
            bracket1_limit: 350_000,
            bracket2_limit: 900_000,
            rate1: 0.31,
            rate2: 0.37,
            rate3: 0.46,
        };
        // 350000*0.31 + 50000*0.37
        assert_eq!(tax.compute_tax(400_000), 127_000);
        // 1001 * 0.31 = 310.31
        assert_eq!(tax.compute_tax(1_001), 310);
    }

    #[test]
    fn test_validate_bracket_order() {
        assert!(schedule().validate().is_ok());

        let inverted = TaxSchedule {
            bracket1_limit: 700_000,
            bracket2_limit: 300_000,
            ..schedule()
        };
        assert!(matches!(inverted.validate(), Err(ProjectionError::BracketOrder { .. })));

        let equal = TaxSchedule {
            bracket2_limit: 300_000,
            ..schedule()
        };
        assert!(equal.validate().is_err());

        let nan_rate = TaxSchedule {
            rate2: f64::NAN,
            ..schedule()
        };
        assert!(matches!(nan_rate.validate(), Err(ProjectionError::InvalidRate { .. })));

        let above_income = TaxSchedule {
            rate3: 1.2,
            ..schedule()
        };
        assert!(matches!(above_income.validate(), Err(ProjectionError::InvalidRate { .. })));
    }
}
