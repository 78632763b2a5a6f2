//! Engine settings loading and management.
//!
//! The only configurable behavior in the engine is the sentinel returned
//! for unmatched period codes. This module provides the settings type and
//! the YAML loader for it.
//!
//! # Example
//!
//! ```no_run
//! use pay_annualizer::config::SettingsLoader;
//!
//! let loader = SettingsLoader::load("./config/engine.yaml").unwrap();
//! println!("Unmatched sentinel: {}", loader.default_unmatched());
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::EngineSettings;
