use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decimal::Rate;
use crate::errors::{FeeScheduleError, Result};

/// fee schedule configuration
///
/// Field names follow the display layer (camelCase); the upper-case keys of
/// the legacy `feeConfig.json` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeScheduleConfig {
    /// annual effective rate (TEA) used to finance multi-quota plans
    #[serde(alias = "TEA")]
    pub annual_rate: Rate,
    /// fraction of the transaction amount that makes up the fee base
    #[serde(default, alias = "feeRate")]
    pub base_fee_rate: Option<Rate>,
    /// flat fee fraction charged outside the installment flow
    #[serde(default, alias = "DEFAULT_FEE_RATE")]
    pub default_fee_rate: Rate,
    /// installment options in presentation order
    #[serde(default, alias = "FEE_SCHEDULES")]
    pub options: Vec<FeeScheduleOption>,
}

/// one installment option offered for the fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeScheduleOption {
    /// number of monthly installments, 1 means a single payment
    pub quota: u32,
    /// discount in percent (e.g., 10 for 10%)
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
    #[serde(default)]
    pub discount_text: String,
}

impl FeeScheduleOption {
    pub fn new(quota: u32, discount_percent: Decimal, discount_text: impl Into<String>) -> Self {
        Self {
            quota,
            discount_percent: Some(discount_percent),
            discount_text: discount_text.into(),
        }
    }

    /// discount as a fraction of the fee base, 0 when unset
    pub fn discount_fraction(&self) -> Decimal {
        self.discount_percent.unwrap_or(Decimal::ZERO) / Decimal::from(100)
    }

    pub fn is_single_payment(&self) -> bool {
        self.quota == 1
    }
}

impl FeeScheduleConfig {
    /// create configuration without options
    pub fn new(annual_rate: Rate, base_fee_rate: Rate, default_fee_rate: Rate) -> Self {
        Self {
            annual_rate,
            base_fee_rate: Some(base_fee_rate),
            default_fee_rate,
            options: Vec::new(),
        }
    }

    /// append an installment option
    pub fn with_option(mut self, option: FeeScheduleOption) -> Self {
        self.options.push(option);
        self
    }

    /// parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// fee base rate, 0 when unset
    pub fn base_fee_rate(&self) -> Rate {
        self.base_fee_rate.unwrap_or(Rate::ZERO)
    }

    /// check the configuration can back a fee calculator
    pub fn validate(&self) -> Result<()> {
        if !self.annual_rate.is_positive() {
            return Err(invalid(format!(
                "annual rate must be positive, got {}",
                self.annual_rate.as_decimal()
            )));
        }

        if self.base_fee_rate().as_decimal() < Decimal::ZERO {
            return Err(invalid(format!(
                "base fee rate must not be negative, got {}",
                self.base_fee_rate().as_decimal()
            )));
        }

        if self.default_fee_rate.as_decimal() < Decimal::ZERO {
            return Err(invalid(format!(
                "default fee rate must not be negative, got {}",
                self.default_fee_rate.as_decimal()
            )));
        }

        for (index, option) in self.options.iter().enumerate() {
            if option.quota == 0 {
                return Err(invalid(format!("option {index}: quota must be at least 1")));
            }

            let percent = option.discount_percent.unwrap_or(Decimal::ZERO);
            if percent < Decimal::ZERO || percent > Decimal::from(100) {
                return Err(invalid(format!(
                    "option {index}: discount percent must be within 0..=100, got {percent}"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> FeeScheduleError {
    warn!(%message, "fee schedule configuration rejected");
    FeeScheduleError::InvalidConfiguration { message }
}
