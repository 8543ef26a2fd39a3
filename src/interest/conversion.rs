use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{FeeScheduleError, Result};

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Annual => 1,
        }
    }
}

/// Decompound an annual effective rate (TEA) into the effective rate of one
/// of `periods_per_year` equal sub-periods: `(1 + annual)^(1 / n) - 1`.
///
/// Compounding the result `n` times reproduces `annual_effective_rate`.
pub fn annual_effective_to_periodic(annual_effective_rate: Rate, periods_per_year: u32) -> Result<Rate> {
    if periods_per_year == 0 {
        return Err(FeeScheduleError::InvalidCompoundingPeriods { periods_per_year });
    }

    let base = Decimal::ONE + annual_effective_rate.as_decimal();
    if base <= Decimal::ZERO {
        return Err(FeeScheduleError::InvalidInterestRate {
            rate: annual_effective_rate,
        });
    }

    if periods_per_year == 1 {
        return Ok(annual_effective_rate);
    }

    let exponent = Decimal::ONE / Decimal::from(periods_per_year);
    let factor = base
        .checked_powd(exponent)
        .ok_or_else(|| FeeScheduleError::CalculationError {
            message: format!("({base})^(1/{periods_per_year}) is not representable"),
        })?;

    Ok(Rate::from_decimal(factor - Decimal::ONE))
}

impl Rate {
    /// periodic effective rate for the given frequency, treating `self` as TEA
    pub fn to_periodic(&self, frequency: CompoundingFrequency) -> Result<Rate> {
        annual_effective_to_periodic(*self, frequency.periods_per_year())
    }

    /// Effective annual rate of `self` taken as a nominal rate compounded
    /// `periods_per_year` times: `(1 + nominal / n)^n - 1`.
    pub fn nominal_to_effective(&self, periods_per_year: u32) -> Result<Rate> {
        if periods_per_year == 0 {
            return Err(FeeScheduleError::InvalidCompoundingPeriods { periods_per_year });
        }

        let n = Decimal::from(periods_per_year);
        let periodic = Rate::from_decimal(self.as_decimal() / n);
        let factor = periodic
            .compound_factor(periods_per_year as u64)
            .ok_or_else(|| FeeScheduleError::CalculationError {
                message: format!("compounding {self} {periods_per_year} times overflows"),
            })?;

        Ok(Rate::from_decimal(factor - Decimal::ONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn recompound(periodic: Rate, periods_per_year: u32) -> Decimal {
        periodic.compound_factor(periods_per_year as u64).unwrap() - Decimal::ONE
    }

    #[test]
    fn test_monthly_from_tea() {
        let monthly = annual_effective_to_periodic(Rate::from_decimal(dec!(0.36)), 12).unwrap();
        // 1.36^(1/12) - 1 = 0.0259548346585...
        assert!((monthly.as_decimal() - dec!(0.0259548346585)).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_annual_frequency_is_identity() {
        let tea = Rate::from_decimal(dec!(0.18));
        assert_eq!(annual_effective_to_periodic(tea, 1).unwrap(), tea);
        assert_eq!(tea.to_periodic(CompoundingFrequency::Annual).unwrap(), tea);
    }

    #[test]
    fn test_zero_rate() {
        let periodic = annual_effective_to_periodic(Rate::ZERO, 12).unwrap();
        assert!(periodic.as_decimal().abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_negative_rate_round_trip() {
        let tea = Rate::from_decimal(dec!(-0.1));
        let monthly = annual_effective_to_periodic(tea, 12).unwrap();
        assert!(monthly.as_decimal() < Decimal::ZERO);
        assert!((recompound(monthly, 12) - tea.as_decimal()).abs() < dec!(0.00000001));
    }

    #[test]
    fn test_zero_periods_rejected() {
        let result = annual_effective_to_periodic(Rate::from_percentage(10), 0);
        assert!(matches!(
            result,
            Err(FeeScheduleError::InvalidCompoundingPeriods { periods_per_year: 0 })
        ));
    }

    #[test]
    fn test_total_loss_rate_rejected() {
        let result = annual_effective_to_periodic(Rate::from_decimal(dec!(-1)), 12);
        assert!(matches!(result, Err(FeeScheduleError::InvalidInterestRate { .. })));
    }

    #[test]
    fn test_nominal_to_effective() {
        let apr = Rate::from_percentage(18);

        let monthly_apy = apr.nominal_to_effective(12).unwrap();
        assert!(monthly_apy.as_percentage() > dec!(19.5));
        assert!(monthly_apy.as_percentage() < dec!(19.6));

        let daily_apy = apr.nominal_to_effective(365).unwrap();
        assert!(daily_apy > monthly_apy);

        assert!(matches!(
            apr.nominal_to_effective(0),
            Err(FeeScheduleError::InvalidCompoundingPeriods { periods_per_year: 0 })
        ));
        assert!(daily_apy.as_percentage() > dec!(19.7));
        assert!(daily_apy.as_percentage() < dec!(19.8));
    }

    #[test]
    fn test_frequency_periods() {
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Daily.periods_per_year(), 365);
    }

    proptest! {
        #[test]
        fn prop_periodic_rate_recompounds_to_annual(
            rate_bps in 1i64..20_000,
            periods_per_year in 1u32..=365,
        ) {
            let tea = Rate::from_decimal(Decimal::new(rate_bps, 4));
            let periodic = annual_effective_to_periodic(tea, periods_per_year).unwrap();
            let diff = (recompound(periodic, periods_per_year) - tea.as_decimal()).abs();
            prop_assert!(diff < dec!(0.000001), "diff {} for {} / {}", diff, tea, periods_per_year);
        }
    }
}
