//! Pay record model.
//!
//! This module defines the [`PayRecord`] type: one periodic pay figure
//! tagged with the period code it was reported at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PeriodCode;

/// A single periodic pay figure submitted for annualization.
///
/// A negative `value` is a pre-existing sentinel marker set by an upstream
/// system and is passed through the engine unscaled. The optional
/// `estimated_annual` figure is used for pay-band classification when the
/// period code turns out to be invalid.
///
/// # Example
///
/// ```
/// use pay_annualizer::models::{PayRecord, PeriodCode};
/// use rust_decimal::Decimal;
///
/// let record = PayRecord {
///     value: Decimal::from(500),
///     period: PeriodCode::new(1),
///     estimated_annual: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRecord {
    /// The pay amount as reported for one period.
    pub value: Decimal,
    /// The period code the amount was reported at.
    pub period: PeriodCode,
    /// An independently estimated annual figure, used as the banding
    /// fallback when the period code is invalid.
    #[serde(default)]
    pub estimated_annual: Option<Decimal>,
}
