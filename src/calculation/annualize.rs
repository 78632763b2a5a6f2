//! Pay annualization policy.
//!
//! This module applies the value/period policy that turns one periodic pay
//! figure into an annual figure. Failure states are reserved negative
//! sentinel values, never errors: `-8` marks an explicitly invalid period
//! code, and a caller-supplied default (conventionally `-9`) marks a code
//! that is simply absent from the multiplier table.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::lookup_multiplier;
use crate::error::{EngineError, EngineResult};
use crate::models::PeriodCode;

/// Sentinel for an explicitly invalid period code (at or below zero, or 97).
pub const INVALID_PERIOD: Decimal = Decimal::from_parts(8, 0, 0, true, 0);

/// Conventional sentinel for a period code absent from the multiplier table.
///
/// This is only a convention: the unmatched sentinel is caller-configurable,
/// unlike [`INVALID_PERIOD`] which is fixed.
pub const DEFAULT_UNMATCHED: Decimal = Decimal::from_parts(9, 0, 0, true, 0);

/// Rounds a computed pay figure to two decimal places, half away from zero.
fn round_pay(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Annualizes a single periodic pay figure.
///
/// The rules are evaluated in order and the first applicable one wins:
///
/// 1. A negative `value` is a pre-existing sentinel from an upstream system
///    and is returned unchanged, even when the period is invalid.
/// 2. A period absent from the multiplier table and not explicitly invalid
///    returns `default`.
/// 3. A period at or below zero, or equal to 97, returns [`INVALID_PERIOD`].
/// 4. Otherwise the value is scaled by the period's multiplier and rounded
///    to two decimal places.
///
/// The `-8` / `default` distinction is deliberate and must survive: `-8`
/// means the period was flagged invalid, `default` means it was merely
/// unrecognized.
///
/// # Arguments
///
/// * `value` - The pay amount reported for one period
/// * `period` - The period code the amount was reported at
/// * `default` - The sentinel to return for unmatched period codes
///   (conventionally [`DEFAULT_UNMATCHED`])
///
/// # Returns
///
/// The annualized figure rounded to two decimal places, or a sentinel.
/// Never fails: every numeric input resolves to a number.
///
/// # Examples
///
/// ```
/// use pay_annualizer::calculation::{annualize, DEFAULT_UNMATCHED, INVALID_PERIOD};
/// use pay_annualizer::models::PeriodCode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Weekly pay scales by 365/7
/// let annual = annualize(Decimal::from(500), PeriodCode::new(1), DEFAULT_UNMATCHED);
/// assert_eq!(annual, Decimal::from_str("26071.43").unwrap());
///
/// // The reserved code 97 is invalid
/// let annual = annualize(Decimal::from(1000), PeriodCode::new(97), DEFAULT_UNMATCHED);
/// assert_eq!(annual, INVALID_PERIOD);
///
/// // Code 6 is not in the table, so the caller's default comes back
/// let annual = annualize(Decimal::from(1000), PeriodCode::new(6), DEFAULT_UNMATCHED);
/// assert_eq!(annual, DEFAULT_UNMATCHED);
/// ```
pub fn annualize(value: Decimal, period: PeriodCode, default: Decimal) -> Decimal {
    // Rule order matters: an upstream sentinel wins over an invalid period,
    // and an invalid period wins over "unmatched".
    if value < Decimal::ZERO {
        return value;
    }

    match lookup_multiplier(period) {
        Some(multiplier) => round_pay(multiplier.apply(value)),
        // Invalid codes are never in the table, so the absent arm decides
        // between the two sentinel categories.
        None if period.is_invalid() => INVALID_PERIOD,
        None => default,
    }
}

/// Annualizes parallel sequences of values and period codes element-wise.
///
/// Position `i` of the output is `annualize(values[i], periods[i], default)`;
/// elements are independent of each other and input order is preserved.
///
/// # Arguments
///
/// * `values` - The pay amounts, one per record
/// * `periods` - The period codes, parallel to `values`
/// * `default` - The sentinel to return for unmatched period codes
///
/// # Returns
///
/// An output sequence of the same length, or
/// [`EngineError::LengthMismatch`] when the two slices differ in length.
///
/// # Example
///
/// ```
/// use pay_annualizer::calculation::{annualize_series, DEFAULT_UNMATCHED};
/// use pay_annualizer::models::PeriodCode;
/// use rust_decimal::Decimal;
///
/// let values = vec![Decimal::from(4000), Decimal::from(1000)];
/// let periods = vec![PeriodCode::new(5), PeriodCode::new(52)];
///
/// let annual = annualize_series(&values, &periods, DEFAULT_UNMATCHED).unwrap();
/// assert_eq!(annual, vec![Decimal::from(48000), Decimal::from(1000)]);
/// ```
pub fn annualize_series(
    values: &[Decimal],
    periods: &[PeriodCode],
    default: Decimal,
) -> EngineResult<Vec<Decimal>> {
    if values.len() != periods.len() {
        return Err(EngineError::LengthMismatch {
            values: values.len(),
            periods: periods.len(),
        });
    }

    Ok(values
        .iter()
        .zip(periods)
        .map(|(value, period)| annualize(*value, *period, default))
        .collect())
}
