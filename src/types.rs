use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// one row of an amortization table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    /// 1-based period number
    pub period: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// balance after this period's payment, exactly zero on the last period
    pub remaining_balance: Money,
}

impl AmortizationEntry {
    /// total payment for the period
    pub fn payment(&self) -> Money {
        self.principal_paid + self.interest_paid
    }
}

/// installment plan offered for a fee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePaymentPlan {
    pub payment_quota: u32,
    pub payment_with_discount: Money,
    pub discount_text: String,
    pub fee_monthly: Money,
    pub total_fee: Money,
}
