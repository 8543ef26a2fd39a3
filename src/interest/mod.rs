pub mod conversion;

pub use conversion::{annual_effective_to_periodic, CompoundingFrequency};
