//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST endpoints for running a payroll
//! computation and for pricing the deduction lines of a gross pay on
//! their own. All logging lives here; the computation core never logs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeductionsRequest, PayrollRequest};
pub use response::{ApiError, DeductionsResponse, PayrollResponse};
pub use state::AppState;
