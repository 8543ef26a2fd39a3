use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{FeeScheduleConfig, FeeScheduleOption};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::fees::amount::AmountInput;
use crate::interest::{annual_effective_to_periodic, CompoundingFrequency};
use crate::payments::Loan;
use crate::types::FeePaymentPlan;

/// Builds installment plans for a transaction fee.
///
/// Holds an immutable configuration snapshot; to change the configuration,
/// build a new calculator and swap it in.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    config: FeeScheduleConfig,
    // installments are always monthly, whatever the quota count
    periodic_rate: Rate,
}

impl FeeCalculator {
    pub fn new(config: FeeScheduleConfig) -> Result<Self> {
        config.validate()?;
        let periodic_rate = annual_effective_to_periodic(
            config.annual_rate,
            CompoundingFrequency::Monthly.periods_per_year(),
        )?;

        Ok(Self {
            config,
            periodic_rate,
        })
    }

    pub fn config(&self) -> &FeeScheduleConfig {
        &self.config
    }

    /// monthly effective rate derived from the configured TEA
    pub fn periodic_rate(&self) -> Rate {
        self.periodic_rate
    }

    /// Flat fee for `amount` at the default fee rate.
    ///
    /// Returns zero for anything that is not a non-negative number, and for
    /// amounts whose fee leaves the decimal range.
    pub fn calculate_default_fee(&self, amount: impl AmountInput) -> Money {
        accepted_amount(&amount)
            .and_then(|amount| total_fee(amount, self.config.default_fee_rate))
            .unwrap_or(Money::ZERO)
    }

    /// Fee base for `amount`, zero for rejected amounts.
    pub fn fee_base(&self, amount: impl AmountInput) -> Money {
        accepted_amount(&amount)
            .and_then(|amount| total_fee(amount, self.config.base_fee_rate()))
            .unwrap_or(Money::ZERO)
    }

    /// One plan per configured option, in configuration order.
    ///
    /// Returns an empty list for anything that is not a non-negative number.
    /// An option whose financing leaves the decimal range degrades to a zero
    /// plan like any other option that cannot be financed.
    pub fn generate_schedule_payments(&self, amount: impl AmountInput) -> Vec<FeePaymentPlan> {
        let Some(fee_base) = accepted_amount(&amount)
            .and_then(|amount| total_fee(amount, self.config.base_fee_rate()))
        else {
            return Vec::new();
        };

        self.config
            .options
            .iter()
            .map(|option| self.plan_for(option, fee_base))
            .collect()
    }

    fn plan_for(&self, option: &FeeScheduleOption, fee_base: Money) -> FeePaymentPlan {
        // a validated discount keeps the factor within 0..=1
        let payment_with_discount = fee_base
            .checked_mul(Decimal::ONE - option.discount_fraction())
            .unwrap_or(fee_base);

        let (fee_monthly, total_fee) = if option.is_single_payment() {
            (fee_base, fee_base)
        } else {
            match Loan::new(fee_base, self.periodic_rate, option.quota) {
                Ok(loan) => (loan.payment_per_period(), loan.total_amount_paid()),
                Err(err) => {
                    // nothing to finance, or too much: offer the option at zero instead of failing the list
                    warn!(
                        quota = option.quota,
                        %fee_base,
                        error = %err,
                        "fee option cannot be financed, degrading to zero plan"
                    );
                    (Money::ZERO, Money::ZERO)
                }
            }
        };

        FeePaymentPlan {
            payment_quota: option.quota,
            payment_with_discount,
            discount_text: option.discount_text.clone(),
            fee_monthly,
            total_fee,
        }
    }
}

fn accepted_amount(amount: &impl AmountInput) -> Option<Money> {
    match amount.to_amount() {
        Some(value) if value >= Decimal::ZERO => Some(Money::from_decimal(value)),
        Some(value) => {
            debug!(%value, "negative amount rejected");
            None
        }
        None => {
            debug!("non-numeric amount rejected");
            None
        }
    }
}

fn total_fee(base_amount: Money, fee_rate: Rate) -> Option<Money> {
    let fee = base_amount.apply_rate(fee_rate);
    if fee.is_none() {
        debug!(%base_amount, %fee_rate, "fee out of decimal range, amount rejected");
    }
    fee
}
