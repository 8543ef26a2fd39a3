pub mod amount;
pub mod calculator;

pub use amount::AmountInput;
pub use calculator::FeeCalculator;
