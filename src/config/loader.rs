//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading engine
//! settings from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

/// Loads and provides access to engine settings.
///
/// The settings file is a single YAML document:
///
/// ```text
/// # config/engine.yaml
/// default_unmatched: -9
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_annualizer::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/engine.yaml").unwrap();
/// assert!(loader.default_unmatched().is_sign_negative());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    settings: EngineSettings,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `SettingsLoader` on success, or an error if:
    /// - The file is missing (`SettingsNotFound`)
    /// - The file contains invalid YAML (`SettingsParseError`)
    /// - The configured unmatched sentinel is not negative (`InvalidSentinel`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let settings: EngineSettings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_settings(settings)
    }

    /// Builds a loader from already-constructed settings, validating them.
    ///
    /// Sentinels must be strictly negative; a non-negative default would be
    /// indistinguishable from a computed annual figure downstream.
    pub fn from_settings(settings: EngineSettings) -> EngineResult<Self> {
        if settings.default_unmatched >= Decimal::ZERO {
            return Err(EngineError::InvalidSentinel {
                value: settings.default_unmatched,
            });
        }

        Ok(Self { settings })
    }

    /// Returns a reference to the loaded settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the sentinel to use for unmatched period codes.
    pub fn default_unmatched(&self) -> Decimal {
        self.settings.default_unmatched
    }
}
