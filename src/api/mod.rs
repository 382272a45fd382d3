//! HTTP API module for the shift engine.
//!
//! This module exposes the template catalog, duration, status, summary
//! and assignment operations as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AssignRequest, DurationRequest, StatusRequest, SummaryRequest};
pub use response::{ApiError, DurationResponse, StatusResponse, TemplatesResponse};
pub use state::AppState;
