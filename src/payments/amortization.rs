use std::iter::FusedIterator;

use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{FeeScheduleError, Result};
use crate::payments::cash_flow;
use crate::types::AmortizationEntry;

/// validated inputs of a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanTerms {
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
}

impl LoanTerms {
    /// Principal, per-period rate and term must all be strictly positive.
    pub fn new(principal: Money, periodic_rate: Rate, periods: u32) -> Result<Self> {
        if !principal.is_positive() || !periodic_rate.is_positive() || periods == 0 {
            debug!(%principal, %periodic_rate, periods, "rejected loan parameters");
            return Err(FeeScheduleError::InvalidLoanParameters {
                principal,
                rate: periodic_rate,
                periods,
            });
        }

        Ok(Self {
            principal,
            periodic_rate,
            periods,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn periodic_rate(&self) -> Rate {
        self.periodic_rate
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }
}

/// Fixed-payment amortizing loan.
///
/// All amounts returned are positive: the principal is what is owed, the
/// payment is what is paid each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loan {
    terms: LoanTerms,
    // unrounded payment, kept so schedule rows are derived from full precision
    payment: Decimal,
    total_paid: Money,
    present_value: Money,
    payments_value: Money,
}

impl Loan {
    /// create a loan from present value, per-period rate and number of periods
    pub fn new(principal: Money, periodic_rate: Rate, periods: u32) -> Result<Self> {
        Self::from_terms(LoanTerms::new(principal, periodic_rate, periods)?)
    }

    /// Fails with `CalculationError` when any cash flow of the loan leaves the
    /// decimal range; once built, every schedule row is representable.
    pub fn from_terms(terms: LoanTerms) -> Result<Self> {
        let rate = terms.periodic_rate.as_decimal();
        let periods = terms.periods;
        // the principal is money received, so it enters the annuity formula negated
        let pv = -terms.principal.as_decimal();

        let payment = cash_flow::pmt(rate, periods, pv, Decimal::ZERO)
            .ok_or_else(|| out_of_range(&terms, "payment"))?;
        let total_paid = Money::from_decimal(payment.abs())
            .checked_mul(Decimal::from(periods))
            .ok_or_else(|| out_of_range(&terms, "total paid"))?;
        let present_value = cash_flow::pv(rate, periods, Decimal::ZERO, Decimal::ZERO)
            .ok_or_else(|| out_of_range(&terms, "present value"))?;
        // discounting the payments scales them by the largest growth factor of the schedule
        let payments_value = cash_flow::pv(rate, periods, payment, Decimal::ZERO)
            .ok_or_else(|| out_of_range(&terms, "present value of payments"))?;

        Ok(Self {
            terms,
            payment,
            total_paid,
            present_value: Money::from_decimal(present_value.abs()),
            payments_value: Money::from_decimal(payments_value.abs()),
        })
    }

    pub fn terms(&self) -> LoanTerms {
        self.terms
    }

    /// fixed payment per period: `P * r / (1 - (1 + r)^-n)`
    pub fn payment_per_period(&self) -> Money {
        Money::from_decimal(self.payment.abs())
    }

    /// payment times number of periods
    pub fn total_amount_paid(&self) -> Money {
        self.total_paid
    }

    pub fn total_interest_paid(&self) -> Money {
        self.total_paid - self.terms.principal
    }

    /// Present value of a loan with no periodic payment and no future value.
    ///
    /// This ignores the loan's own principal and payment, so it is zero for
    /// every valid loan. See [`Loan::present_value_of_payments`] for the value
    /// of the payment stream.
    pub fn present_value(&self) -> Money {
        self.present_value
    }

    /// payment stream discounted at the loan rate, equal to the principal up to rounding
    pub fn present_value_of_payments(&self) -> Money {
        self.payments_value
    }

    /// Lazily computed amortization table, one entry per period.
    ///
    /// Each call starts a fresh pass from the first period.
    pub fn schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule {
            loan: *self,
            next_period: 1,
            remaining: self.terms.periods,
            balance: self.terms.principal,
        }
    }

    /// full amortization table
    pub fn amortization_table(&self) -> Vec<AmortizationEntry> {
        self.schedule().collect()
    }

    fn entry(&self, period: u32, balance_before: Money) -> Option<AmortizationEntry> {
        let rate = self.terms.periodic_rate.as_decimal();
        let pv = -self.terms.principal.as_decimal();

        let principal_paid =
            Money::from_decimal(cash_flow::ppmt(rate, period, self.terms.periods, pv)?.abs());
        let interest_paid =
            Money::from_decimal(cash_flow::ipmt(rate, period, self.terms.periods, pv)?.abs());

        // the last period absorbs whatever rounding left behind
        let remaining_balance = if period == self.terms.periods {
            Money::ZERO
        } else {
            balance_before - principal_paid
        };

        Some(AmortizationEntry {
            period,
            principal_paid,
            interest_paid,
            remaining_balance,
        })
    }
}

fn out_of_range(terms: &LoanTerms, what: &str) -> FeeScheduleError {
    debug!(
        principal = %terms.principal,
        rate = %terms.periodic_rate,
        periods = terms.periods,
        what,
        "loan cash flow out of decimal range"
    );
    FeeScheduleError::CalculationError {
        message: format!(
            "{what} of {} at {} over {} periods overflows decimal range",
            terms.principal,
            terms.periodic_rate.as_decimal(),
            terms.periods
        ),
    }
}

/// iterator over the periods of a [`Loan`]
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    loan: Loan,
    next_period: u32,
    remaining: u32,
    balance: Money,
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // bounded by the flows `Loan::from_terms` already computed
        let entry = self.loan.entry(self.next_period, self.balance)?;
        self.balance = entry.remaining_balance;
        self.next_period = self.next_period.saturating_add(1);
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AmortizationSchedule {}

impl FusedIterator for AmortizationSchedule {}
