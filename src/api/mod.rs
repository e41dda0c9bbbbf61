//! HTTP API module for the billing engine.
//!
//! This module provides the REST endpoints that turn an invoice into a
//! statement, either as computed data or as a rendered document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::StatementRequest;
pub use response::{ApiError, StatementResponse};
pub use state::AppState;
