//! HTTP API module for the wage compliance engine.
//!
//! This module provides the REST endpoints: the wage-legality calculator and
//! the minimum-wage table listing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::WageCalculationRequest;
pub use response::{ApiError, MinimumWageRow};
pub use state::AppState;
