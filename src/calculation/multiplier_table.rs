//! Period-code multiplier table.
//!
//! This module provides the fixed mapping from pay period codes to the
//! factors that scale one period's pay into an annual figure. The table is
//! an ordered list of exact-match rules with first-match-wins semantics;
//! the rules are mutually exclusive by construction.

use rust_decimal::Decimal;

use crate::models::PeriodCode;

/// A period-to-annual conversion factor, held as an exact ratio.
///
/// Several factors (such as 365/7 for weekly pay) are not representable as
/// finite decimals, so the numerator and denominator are kept separate and
/// division happens once, against the pay value being scaled.
///
/// # Example
///
/// ```
/// use pay_annualizer::calculation::lookup_multiplier;
/// use pay_annualizer::models::PeriodCode;
/// use rust_decimal::Decimal;
///
/// let weekly = lookup_multiplier(PeriodCode::new(1)).unwrap();
/// assert_eq!(weekly.apply(Decimal::from(7)), Decimal::from(365));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    numerator: i64,
    denominator: i64,
}

impl Multiplier {
    /// Creates a multiplier from an exact ratio.
    const fn ratio(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a whole-number multiplier (N payments per year).
    const fn per_year(n: i64) -> Self {
        Self::ratio(n, 1)
    }

    /// Scales a single period's pay value to an annual value.
    ///
    /// The result is unrounded; callers that need a monetary figure round
    /// to two decimal places afterwards.
    pub fn apply(&self, value: Decimal) -> Decimal {
        value * Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }

    /// Returns the multiplier as a decimal factor.
    ///
    /// For non-terminating ratios such as 365/7 this is an approximation at
    /// `Decimal` precision; [`Multiplier::apply`] is the exact path.
    pub fn factor(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

/// The fixed period-code rules, in evaluation order.
///
/// Each rule pairs the set of period codes it matches with the annual
/// multiplier for those codes. Codes 1, 90 and 95 all mean weekly pay;
/// codes 7 through 13 and 26 mean "paid N times a year"; code 52 marks a
/// figure that is already annual.
const MULTIPLIER_RULES: &[(&[i64], Multiplier)] = &[
    (&[1, 90, 95], Multiplier::ratio(365, 7)), // weekly
    (&[2], Multiplier::ratio(365, 14)),        // fortnightly
    (&[3], Multiplier::ratio(365, 21)),        // 3-weekly
    (&[4], Multiplier::ratio(365, 28)),        // 4-weekly
    (&[5], Multiplier::per_year(12)),          // monthly
    (&[7], Multiplier::per_year(7)),
    (&[8], Multiplier::per_year(8)),
    (&[9], Multiplier::per_year(9)),
    (&[10], Multiplier::per_year(10)),
    (&[13], Multiplier::per_year(13)),
    (&[26], Multiplier::per_year(26)), // fortnightly, counted per year
    (&[52], Multiplier::per_year(1)),  // already annual
];

/// Looks up the annual multiplier for a period code.
///
/// Matching is exact: period codes are discrete categorical codes even
/// though they are carried as integers, so there is no numeric tolerance
/// and no partial matching. An unmatched code returns `None` without
/// raising an error — distinguishing "unmatched" from "invalid" is the
/// annualization policy's job, not the table's.
///
/// # Arguments
///
/// * `period` - The period code to look up
///
/// # Returns
///
/// The [`Multiplier`] for the code, or `None` when the code is absent from
/// the table.
///
/// # Example
///
/// ```
/// use pay_annualizer::calculation::lookup_multiplier;
/// use pay_annualizer::models::PeriodCode;
///
/// assert!(lookup_multiplier(PeriodCode::new(5)).is_some());
/// assert!(lookup_multiplier(PeriodCode::new(6)).is_none());
/// assert!(lookup_multiplier(PeriodCode::new(97)).is_none());
/// ```
pub fn lookup_multiplier(period: PeriodCode) -> Option<Multiplier> {
    MULTIPLIER_RULES
        .iter()
        .find(|(codes, _)| codes.contains(&period.value()))
        .map(|(_, multiplier)| *multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn multiplier_for(code: i64) -> Multiplier {
        lookup_multiplier(PeriodCode::new(code)).unwrap()
    }

    /// MT-001: all weekly codes share the 365/7 multiplier
    #[test]
    fn test_weekly_codes_share_multiplier() {
        let weekly = multiplier_for(1);
        assert_eq!(multiplier_for(90), weekly);
        assert_eq!(multiplier_for(95), weekly);
        assert_eq!(weekly.apply(dec("7")), dec("365"));
    }

    /// MT-002: week-multiple codes scale by 365 over the period length
    #[test]
    fn test_week_multiple_codes() {
        assert_eq!(multiplier_for(2).apply(dec("14")), dec("365"));
        assert_eq!(multiplier_for(3).apply(dec("21")), dec("365"));
        assert_eq!(multiplier_for(4).apply(dec("28")), dec("365"));
    }

    /// MT-003: monthly pay scales by 12
    #[test]
    fn test_monthly_code() {
        assert_eq!(multiplier_for(5).apply(dec("4000")), dec("48000"));
        assert_eq!(multiplier_for(5).factor(), dec("12"));
    }

    /// MT-004: N-times-per-year codes scale by their own value
    #[test]
    fn test_count_per_year_codes() {
        for code in [7, 8, 9, 10, 13, 26] {
            assert_eq!(
                multiplier_for(code).apply(dec("100")),
                Decimal::from(code * 100),
                "code {}",
                code
            );
        }
    }

    /// MT-005: code 52 is already annual
    #[test]
    fn test_annual_code_is_identity() {
        assert_eq!(multiplier_for(52).apply(dec("1000")), dec("1000"));
    }

    /// MT-006: unrecognized codes are absent
    #[test]
    fn test_unmatched_codes_are_absent() {
        for code in [6, 11, 12, 14, 25, 27, 51, 53, 96, 98, 100] {
            assert!(
                lookup_multiplier(PeriodCode::new(code)).is_none(),
                "code {}",
                code
            );
        }
    }

    /// MT-007: invalid codes are absent too
    #[test]
    fn test_invalid_codes_are_absent() {
        assert!(lookup_multiplier(PeriodCode::new(0)).is_none());
        assert!(lookup_multiplier(PeriodCode::new(-1)).is_none());
        assert!(lookup_multiplier(PeriodCode::new(97)).is_none());
    }

    #[test]
    fn test_all_multipliers_are_positive() {
        for (codes, multiplier) in MULTIPLIER_RULES {
            assert!(
                multiplier.factor() > Decimal::ZERO,
                "codes {:?}",
                codes
            );
        }
    }

    #[test]
    fn test_rules_are_mutually_exclusive() {
        let mut seen = std::collections::HashSet::new();
        for (codes, _) in MULTIPLIER_RULES {
            for code in *codes {
                assert!(seen.insert(*code), "code {} appears in two rules", code);
            }
        }
    }

    #[test]
    fn test_weekly_factor_approximates_52_weeks() {
        let factor = multiplier_for(1).factor();
        assert!(factor > dec("52.14") && factor < dec("52.15"));
    }
}
