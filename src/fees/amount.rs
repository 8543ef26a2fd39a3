use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::decimal::Money;

/// Loosely typed transaction amount as it arrives from a display layer.
///
/// `to_amount` returns `None` for anything that is not a finite number; sign
/// checks are left to the caller.
pub trait AmountInput {
    fn to_amount(&self) -> Option<Decimal>;
}

impl<T: AmountInput + ?Sized> AmountInput for &T {
    fn to_amount(&self) -> Option<Decimal> {
        (**self).to_amount()
    }
}

impl AmountInput for Money {
    fn to_amount(&self) -> Option<Decimal> {
        Some(self.as_decimal())
    }
}

impl AmountInput for Decimal {
    fn to_amount(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl AmountInput for i32 {
    fn to_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl AmountInput for i64 {
    fn to_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl AmountInput for u32 {
    fn to_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl AmountInput for u64 {
    fn to_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl AmountInput for f64 {
    fn to_amount(&self) -> Option<Decimal> {
        // NaN and infinities have no decimal representation
        Decimal::from_f64(*self)
    }
}

impl AmountInput for str {
    fn to_amount(&self) -> Option<Decimal> {
        Decimal::from_str(self.trim()).ok()
    }
}

impl AmountInput for String {
    fn to_amount(&self) -> Option<Decimal> {
        self.as_str().to_amount()
    }
}

impl AmountInput for serde_json::Value {
    fn to_amount(&self) -> Option<Decimal> {
        match self {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Decimal::from(u))
                } else {
                    n.as_f64().and_then(Decimal::from_f64)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_numbers() {
        assert_eq!(1000i32.to_amount(), Some(dec!(1000)));
        assert_eq!(1000u64.to_amount(), Some(dec!(1000)));
        assert_eq!(12.5f64.to_amount(), Some(dec!(12.5)));
        assert_eq!(Money::from_major(7).to_amount(), Some(dec!(7)));
        assert_eq!((-5i64).to_amount(), Some(dec!(-5)));
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(f64::NAN.to_amount(), None);
        assert_eq!(f64::INFINITY.to_amount(), None);
        assert_eq!(f64::NEG_INFINITY.to_amount(), None);
    }

    #[test]
    fn test_strings() {
        assert_eq!("abc".to_amount(), None);
        assert_eq!("".to_amount(), None);
        assert_eq!(" 250.75 ".to_amount(), Some(dec!(250.75)));
        assert_eq!(String::from("42").to_amount(), Some(dec!(42)));
    }

    #[test]
    fn test_json_values() {
        assert_eq!(json!(1000).to_amount(), Some(dec!(1000)));
        assert_eq!(json!(0.5).to_amount(), Some(dec!(0.5)));
        assert_eq!(json!("1000").to_amount(), None);
        assert_eq!(json!(null).to_amount(), None);
        assert_eq!(json!([1]).to_amount(), None);
    }
}
