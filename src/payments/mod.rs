pub mod amortization;
mod cash_flow;

pub use amortization::{AmortizationSchedule, Loan, LoanTerms};
