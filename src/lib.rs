pub mod config;
pub mod decimal;
pub mod errors;
pub mod fees;
pub mod interest;
pub mod payments;
pub mod types;

// re-export key types
pub use config::{FeeScheduleConfig, FeeScheduleOption};
pub use decimal::{Money, Rate};
pub use errors::{FeeScheduleError, Result};
pub use fees::{AmountInput, FeeCalculator};
pub use interest::{annual_effective_to_periodic, CompoundingFrequency};
pub use payments::{AmortizationSchedule, Loan, LoanTerms};
pub use types::{AmortizationEntry, FeePaymentPlan};
