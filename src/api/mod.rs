//! HTTP API for the Tuition Pricing Engine.
//!
//! This module provides the axum router, request/response types, and shared
//! application state for serving the engine over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ConfigUpdateRequest;
pub use response::{ApiError, ApiErrorResponse, ClassPricingEntry, ConfigView, PricingEntry};
pub use state::AppState;
