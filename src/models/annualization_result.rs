//! Annualization result models for the Pay Annualization Engine.
//!
//! This module contains the [`AnnualizationResult`] envelope and its
//! associated structures that capture the outputs of a batch annualization
//! run: per-record figures plus aggregated totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The derived figures for a single input record.
///
/// `annual_pay` and `monthly_pay` carry either a computed figure (rounded to
/// two decimal places) or a negative sentinel. `pay_band` is absent when no
/// band is defined for the annualized figure.
///
/// # Example
///
/// ```
/// use pay_annualizer::models::AnnualizedRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = AnnualizedRecord {
///     annual_pay: Decimal::from_str("48000.00").unwrap(),
///     monthly_pay: Decimal::from_str("4000.00").unwrap(),
///     pay_band: Some(13),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualizedRecord {
    /// The annualized pay figure, or a negative sentinel.
    pub annual_pay: Decimal,
    /// The monthly pay figure derived from `annual_pay`, sentinels preserved.
    pub monthly_pay: Decimal,
    /// The pay band for the annualized figure, if one is defined.
    pub pay_band: Option<u8>,
}

/// Aggregated totals for a batch annualization run.
///
/// Totals are derived from the outputs alone: a record counts as annualized
/// when its annual figure is non-negative, and as a sentinel otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTotals {
    /// The number of records processed.
    pub records: usize,
    /// The number of records that produced an annualized figure.
    pub annualized: usize,
    /// The number of records that produced a sentinel.
    pub sentinels: usize,
}

/// The complete result of a batch annualization run.
///
/// # Example
///
/// ```
/// use pay_annualizer::models::{AnnualizationResult, RecordTotals};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = AnnualizationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     results: vec![],
///     totals: RecordTotals {
///         records: 0,
///         annualized: 0,
///         sentinels: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualizationResult {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Per-record derived figures, in input order.
    pub results: Vec<AnnualizedRecord>,
    /// Aggregated totals for the run.
    pub totals: RecordTotals,
}

impl RecordTotals {
    /// Derives totals from a slice of per-record results.
    pub fn from_results(results: &[AnnualizedRecord]) -> Self {
        let annualized = results
            .iter()
            .filter(|r| r.annual_pay >= Decimal::ZERO)
            .count();
        Self {
            records: results.len(),
            annualized,
            sentinels: results.len() - annualized,
        }
    }
}
