//! HTTP API module for the Pay Annualization Engine.
//!
//! This module provides the REST surface that applies the annualization
//! engine to batches of (value, period) records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnnualizationRequest;
pub use response::ApiError;
pub use state::AppState;
