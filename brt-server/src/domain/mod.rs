//! Domain types for the transit network.
//!
//! This module contains the validated building blocks of a network:
//! stations, routes and trunk corridors. Identifiers enforce their
//! invariants at construction time, so code that receives them can trust
//! they are trimmed and non-empty.

mod error;
mod route;
mod station;
mod trunk;

pub use error::{Endpoint, EntityKind, ErrorKind, NetworkError};
pub use route::{Route, RouteCode};
pub use station::{OccupancyLevel, Station, StationId, WaitTimes};
pub use trunk::TrunkCorridor;
