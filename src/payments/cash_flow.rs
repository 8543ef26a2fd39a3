//! Time-value-of-money primitives using spreadsheet cash-flow signs: money
//! received is positive, money paid out is negative, payments fall at the end
//! of each period. Nothing outside `payments` sees these signs.
//!
//! Every function returns `None` when an intermediate leaves the decimal range.

use rust_decimal::{Decimal, MathematicalOps};

fn growth(rate: Decimal, periods: u32) -> Option<Decimal> {
    Decimal::ONE.checked_add(rate)?.checked_powu(periods as u64)
}

// `pmt * ((1 + rate)^nper - 1) / rate`, the accumulated payment stream
fn annuity(rate: Decimal, temp: Decimal, pmt: Decimal) -> Option<Decimal> {
    pmt.checked_mul(temp.checked_sub(Decimal::ONE)?)?
        .checked_div(rate)
}

/// periodic payment that takes `pv` to `fv` over `nper` periods
pub(crate) fn pmt(rate: Decimal, nper: u32, pv: Decimal, fv: Decimal) -> Option<Decimal> {
    if rate.is_zero() {
        return pv.checked_add(fv)?.checked_div(Decimal::from(nper)).map(|v| -v);
    }
    let temp = growth(rate, nper)?;
    fv.checked_add(pv.checked_mul(temp)?)?
        .checked_mul(rate)?
        .checked_div(temp.checked_sub(Decimal::ONE)?)
        .map(|v| -v)
}

/// value after `nper` periods of `pmt` applied to `pv`
pub(crate) fn fv(rate: Decimal, nper: u32, pmt: Decimal, pv: Decimal) -> Option<Decimal> {
    if rate.is_zero() {
        return pv.checked_add(pmt.checked_mul(Decimal::from(nper))?).map(|v| -v);
    }
    let temp = growth(rate, nper)?;
    pv.checked_mul(temp)?
        .checked_add(annuity(rate, temp, pmt)?)
        .map(|v| -v)
}

/// present value of `nper` payments of `pmt` followed by `fv`
pub(crate) fn pv(rate: Decimal, nper: u32, pmt: Decimal, fv: Decimal) -> Option<Decimal> {
    if rate.is_zero() {
        return fv.checked_add(pmt.checked_mul(Decimal::from(nper))?).map(|v| -v);
    }
    let temp = growth(rate, nper)?;
    fv.checked_add(annuity(rate, temp, pmt)?)?
        .checked_div(temp)
        .map(|v| -v)
}

/// interest part of the payment in period `per` (1-based)
pub(crate) fn ipmt(rate: Decimal, per: u32, nper: u32, pv: Decimal) -> Option<Decimal> {
    let payment = pmt(rate, nper, pv, Decimal::ZERO)?;
    // balance carried into `per`, with the sign flipped back to the payment's side
    fv(rate, per - 1, payment, pv)?.checked_mul(rate)
}

/// principal part of the payment in period `per` (1-based)
pub(crate) fn ppmt(rate: Decimal, per: u32, nper: u32, pv: Decimal) -> Option<Decimal> {
    pmt(rate, nper, pv, Decimal::ZERO)?.checked_sub(ipmt(rate, per, nper, pv)?)
}
