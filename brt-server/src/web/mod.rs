//! Web layer for the transit network.
//!
//! Exposes the network queries as JSON HTTP endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, SharedNetwork};
