//! Pay band classification.
//!
//! This module maps annualized pay figures onto a fixed, ordered set of
//! annual-salary bands used for categorical reporting. An invalid-period
//! sentinel falls back to an independently estimated annual figure; every
//! other negative input has no band.

use rust_decimal::Decimal;

use crate::calculation::INVALID_PERIOD;

/// The fixed annual-salary breakpoints, in ascending order.
///
/// A band is the 1-based position of the first breakpoint at or above the
/// figure, so bands are right-closed intervals between consecutive
/// breakpoints. Figures above the final breakpoint have no band.
pub const PAY_BAND_BREAKPOINTS: [i64; 14] = [
    0, 4999, 6999, 9999, 12999, 14999, 17999, 19999, 23999, 27999, 35999, 45999, 59999, 99999997,
];

/// Finds the band for a figure, taken at face value.
fn band_of(figure: Decimal) -> Option<u8> {
    PAY_BAND_BREAKPOINTS
        .iter()
        .position(|breakpoint| figure <= Decimal::from(*breakpoint))
        .map(|index| (index + 1) as u8)
}

/// Classifies an annualized pay figure into a pay band.
///
/// The rules are evaluated in order:
///
/// 1. An `annualized_pay` of exactly `-8` (the invalid-period sentinel, and
///    only that sentinel) classifies `estimated_pay` instead, treated as if
///    it were a valid annualized figure.
/// 2. A non-negative `annualized_pay` is banded directly.
/// 3. Any other negative value — including unmatched-period defaults such
///    as `-9` — has no band.
///
/// Absence of a band is an explicit `None`, never an error: it covers both
/// the negative cases above and figures beyond the final breakpoint.
///
/// # Arguments
///
/// * `annualized_pay` - An output of the annualization engine
/// * `estimated_pay` - An independently estimated annual figure, consulted
///   only when `annualized_pay` is the invalid-period sentinel
///
/// # Returns
///
/// The 1-based band index, or `None` when no band is defined.
///
/// # Examples
///
/// ```
/// use pay_annualizer::calculation::{classify_pay_band, DEFAULT_UNMATCHED, INVALID_PERIOD};
/// use rust_decimal::Decimal;
///
/// // 48000 sits in the (45999, 59999] band
/// assert_eq!(classify_pay_band(Decimal::from(48000), Decimal::ZERO), Some(13));
///
/// // An invalid period falls back to the estimate
/// assert_eq!(classify_pay_band(INVALID_PERIOD, Decimal::from(48000)), Some(13));
///
/// // An unmatched-period default has no band, whatever the estimate
/// assert_eq!(classify_pay_band(DEFAULT_UNMATCHED, Decimal::from(48000)), None);
/// ```
pub fn classify_pay_band(annualized_pay: Decimal, estimated_pay: Decimal) -> Option<u8> {
    if annualized_pay == INVALID_PERIOD {
        band_of(estimated_pay)
    } else if annualized_pay >= Decimal::ZERO {
        band_of(annualized_pay)
    } else {
        None
    }
}
