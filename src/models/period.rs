//! Pay period code model.
//!
//! This module defines the [`PeriodCode`] type identifying the frequency a
//! pay figure was reported at (weekly, monthly, annual, and so on).

use serde::{Deserialize, Serialize};

/// Identifies the pay frequency a figure was reported at.
///
/// Period codes are discrete categorical codes carried as integers. The
/// recognized codes and their conversion factors live in the multiplier
/// table; a code outside that table is either explicitly invalid (zero,
/// negative, or the reserved code 97) or simply unmatched.
///
/// # Example
///
/// ```
/// use pay_annualizer::models::PeriodCode;
///
/// let weekly = PeriodCode::new(1);
/// assert!(!weekly.is_invalid());
///
/// let reserved = PeriodCode::new(97);
/// assert!(reserved.is_invalid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodCode(i64);

/// The reserved period code that always marks a record as invalid.
const RESERVED_INVALID_CODE: i64 = 97;

impl PeriodCode {
    /// Creates a period code from its raw integer value.
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Returns the raw integer value of this period code.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns true if this code is explicitly invalid.
    ///
    /// Codes at or below zero and the reserved code 97 are flagged invalid
    /// by upstream payroll systems. Invalid codes are distinct from codes
    /// that are merely absent from the multiplier table.
    pub const fn is_invalid(self) -> bool {
        self.0 <= 0 || self.0 == RESERVED_INVALID_CODE
    }
}

impl From<i64> for PeriodCode {
    fn from(code: i64) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
