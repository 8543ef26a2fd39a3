use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum FeeScheduleError {
    #[error("invalid loan parameters: principal {principal}, rate {rate}, periods {periods} must all be positive")]
    InvalidLoanParameters {
        principal: Money,
        rate: Rate,
        periods: u32,
    },

    #[error("invalid compounding periods per year: {periods_per_year}")]
    InvalidCompoundingPeriods {
        periods_per_year: u32,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, FeeScheduleError>;
