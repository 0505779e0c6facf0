//! Network error types.
//!
//! Every failure of registration or querying is one of these variants. Each
//! variant carries the identifiers that caused it, so callers can report the
//! offending station, route or trunk without parsing a message.

use std::fmt;

use super::{RouteCode, StationId};

/// The kind of entity a name or id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A station id.
    Station,
    /// A route code.
    Route,
    /// A trunk corridor name.
    Trunk,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Station => f.write_str("station"),
            EntityKind::Route => f.write_str("route"),
            EntityKind::Trunk => f.write_str("trunk"),
        }
    }
}

/// Which end of an origin/destination pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Where the trip starts.
    Origin,
    /// Where the trip ends.
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Coarse classification of a [`NetworkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity or segment is not registered.
    NotFound,
    /// An argument is outside its allowed values.
    InvalidParameter,
    /// Origin and destination are the same station.
    EqualEndpoints,
    /// The route does not call at one of the stations.
    RouteDoesNotConnect,
    /// No route serves both stations.
    NoPathAvailable,
    /// A name or id is blank.
    EmptyName,
    /// An id is already registered.
    DuplicateId,
    /// A route has fewer than two stops.
    InsufficientStops,
    /// An index invariant was violated.
    InternalInconsistency,
}

/// Errors from building or querying a transit network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// No station is registered under this id.
    #[error("station {0} not found")]
    StationNotFound(String),

    /// No route is registered under this code.
    #[error("route {0} not found")]
    RouteNotFound(String),

    /// No trunk is registered under this name.
    #[error("trunk {0} not found")]
    TrunkNotFound(String),

    /// The trunk has no segment between the two stations.
    #[error("trunk {trunk} has no segment between {from} and {to}")]
    SegmentNotFound {
        trunk: String,
        from: StationId,
        to: StationId,
    },

    /// An argument is outside its allowed set of values.
    #[error("invalid {parameter}: {value}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
    },

    /// A query was asked between a station and itself.
    #[error("origin and destination are the same station ({0})")]
    EqualEndpoints(StationId),

    /// Both stations exist, but the route does not call at one of them.
    #[error("route {route} does not call at {endpoint} station {station}")]
    RouteDoesNotConnect {
        route: RouteCode,
        station: StationId,
        endpoint: Endpoint,
    },

    /// No registered route calls at both stations.
    #[error("no direct route between {origin} and {destination}")]
    NoPathAvailable {
        origin: StationId,
        destination: StationId,
    },

    /// A name or id was blank after trimming.
    #[error("{0} name cannot be empty")]
    EmptyName(EntityKind),

    /// Something with the same id is already registered.
    #[error("{kind} {id} is already registered")]
    DuplicateId { kind: EntityKind, id: String },

    /// Registered routes need at least two stops.
    #[error("route {route} has {count} stops, at least 2 are required")]
    InsufficientStops { route: RouteCode, count: usize },

    /// An index invariant was violated. This is a bug, not bad input.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl NetworkError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::StationNotFound(_)
            | NetworkError::RouteNotFound(_)
            | NetworkError::TrunkNotFound(_)
            | NetworkError::SegmentNotFound { .. } => ErrorKind::NotFound,
            NetworkError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            NetworkError::EqualEndpoints(_) => ErrorKind::EqualEndpoints,
            NetworkError::RouteDoesNotConnect { .. } => ErrorKind::RouteDoesNotConnect,
            NetworkError::NoPathAvailable { .. } => ErrorKind::NoPathAvailable,
            NetworkError::EmptyName(_) => ErrorKind::EmptyName,
            NetworkError::DuplicateId { .. } => ErrorKind::DuplicateId,
            NetworkError::InsufficientStops { .. } => ErrorKind::InsufficientStops,
            NetworkError::InternalInconsistency(_) => ErrorKind::InternalInconsistency,
        }
    }
}
