//! HTTP API module for the payout report engine.
//!
//! This module exposes the report pipeline over REST so that other services
//! can render reports from files visible to the server.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
