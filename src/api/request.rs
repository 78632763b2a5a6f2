//! Request types for the Pay Annualization Engine API.
//!
//! This module defines the JSON request structures for the `/annualize`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayRecord, PeriodCode};

/// Request body for the `/annualize` endpoint.
///
/// Carries a batch of periodic pay records and an optional override for the
/// unmatched-period sentinel. Records are processed independently and
/// results come back in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualizationRequest {
    /// The pay records to annualize.
    pub records: Vec<PayRecordRequest>,
    /// Optional override for the unmatched-period sentinel.
    /// Must be strictly negative when present.
    #[serde(default)]
    pub default_unmatched: Option<Decimal>,
}

/// A single pay record in an annualization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRecordRequest {
    /// The pay amount reported for one period. Negative amounts are
    /// upstream sentinels and pass through unscaled.
    pub value: Decimal,
    /// The raw period code the amount was reported at.
    pub period: i64,
    /// An independently estimated annual figure, used for pay-band
    /// classification when the period code is invalid.
    #[serde(default)]
    pub estimated_annual: Option<Decimal>,
}

impl From<PayRecordRequest> for PayRecord {
    fn from(req: PayRecordRequest) -> Self {
        PayRecord {
            value: req.value,
            period: PeriodCode::new(req.period),
            estimated_annual: req.estimated_annual,
        }
    }
}
