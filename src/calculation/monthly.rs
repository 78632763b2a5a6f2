//! Monthly pay conversion.
//!
//! This module derives monthly figures from annualized ones. Sentinels must
//! never be divided, so any negative input passes through unchanged.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::annualize;
use crate::error::{EngineError, EngineResult};
use crate::models::PeriodCode;

/// The number of months a computed annual figure is divided by.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts an annualized pay figure to a monthly figure.
///
/// The input must be an output of [`annualize`]: a negative input is a
/// sentinel (`-8`, a caller default such as `-9`, or an upstream
/// passthrough) and is returned unchanged. A non-negative input is divided
/// by twelve and rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use pay_annualizer::calculation::{to_monthly, INVALID_PERIOD};
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_monthly(Decimal::from(48000)), Decimal::from(4000));
/// assert_eq!(to_monthly(INVALID_PERIOD), INVALID_PERIOD);
/// ```
pub fn to_monthly(annualized: Decimal) -> Decimal {
    if annualized < Decimal::ZERO {
        return annualized;
    }

    (annualized / MONTHS_PER_YEAR).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Annualizes a periodic pay figure and converts it straight to monthly.
///
/// Convenience pipeline equivalent to `to_monthly(annualize(value, period,
/// default))`, with the same sentinel-preservation rule: whatever sentinel
/// the annualization step produces comes back undivided.
///
/// # Arguments
///
/// * `value` - The pay amount reported for one period
/// * `period` - The period code the amount was reported at
/// * `default` - The sentinel to return for unmatched period codes
///
/// # Example
///
/// ```
/// use pay_annualizer::calculation::{annualize_to_monthly, DEFAULT_UNMATCHED};
/// use pay_annualizer::models::PeriodCode;
/// use rust_decimal::Decimal;
///
/// let monthly = annualize_to_monthly(Decimal::from(4000), PeriodCode::new(5), DEFAULT_UNMATCHED);
/// assert_eq!(monthly, Decimal::from(4000));
/// ```
pub fn annualize_to_monthly(value: Decimal, period: PeriodCode, default: Decimal) -> Decimal {
    to_monthly(annualize(value, period, default))
}

/// Element-wise [`annualize_to_monthly`] over parallel sequences.
///
/// # Returns
///
/// An output sequence of the same length, or
/// [`EngineError::LengthMismatch`] when the slices differ in length.
pub fn annualize_to_monthly_series(
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
        .map(|(value, period)| annualize_to_monthly(*value, *period, default))
        .collect())
}
