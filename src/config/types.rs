//! Engine settings types.
//!
//! This module contains the strongly-typed settings structure that is
//! deserialized from the YAML settings file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_UNMATCHED;

/// Tunable engine settings.
///
/// `default_unmatched` overrides the sentinel returned for period codes
/// absent from the multiplier table. It must be strictly negative; the
/// loader rejects anything else. The invalid-period sentinel `-8` is fixed
/// and not configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// The sentinel returned for unmatched period codes.
    pub default_unmatched: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_unmatched: DEFAULT_UNMATCHED,
        }
    }
}
