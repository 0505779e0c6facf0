//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{DirectRoutes, RankedRoute};

/// Origin and destination query parameters.
#[derive(Debug, Deserialize)]
pub struct EndpointsQuery {
    /// Origin station id
    pub origin: String,

    /// Destination station id
    pub destination: String,
}

/// Request to change a station's occupancy level.
#[derive(Debug, Deserialize)]
pub struct OccupancyRequest {
    /// Level name: LOW, MEDIUM or HIGH
    pub level: String,
}

/// Current wait at a station.
#[derive(Debug, Serialize, PartialEq)]
pub struct WaitResponse {
    pub station: String,
    pub occupancy: String,
    pub wait_minutes: u32,
}

/// All route codes in alphabetical order.
#[derive(Debug, Serialize, PartialEq)]
pub struct RouteListResponse {
    pub routes: Vec<String>,
}

/// Stop count between two stations on a route.
#[derive(Debug, Serialize, PartialEq)]
pub struct StopCountResponse {
    pub route: String,
    pub origin: String,
    pub destination: String,
    /// Stations strictly between origin and destination
    pub intermediate_stops: usize,
}

/// A ranked direct route.
#[derive(Debug, Serialize, PartialEq)]
pub struct DirectRouteResult {
    pub code: String,
    pub intermediate_stops: usize,
}

impl DirectRouteResult {
    pub fn from_ranked(route: &RankedRoute) -> Self {
        Self {
            code: route.code.to_string(),
            intermediate_stops: route.intermediate_stops,
        }
    }
}

/// Direct routes between two stations, best first.
#[derive(Debug, Serialize, PartialEq)]
pub struct DirectRoutesResponse {
    pub origin: String,
    pub destination: String,
    pub routes: Vec<DirectRouteResult>,
    /// Candidates dropped because their stop count failed
    pub skipped: usize,
}

impl DirectRoutesResponse {
    pub fn from_direct(origin: &str, destination: &str, direct: &DirectRoutes) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            routes: direct.routes.iter().map(DirectRouteResult::from_ranked).collect(),
            skipped: direct.skipped,
        }
    }
}

/// Travel time along a trunk segment.
#[derive(Debug, Serialize, PartialEq)]
pub struct TravelTimeResponse {
    pub trunk: String,
    pub origin: String,
    pub destination: String,
    pub minutes: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
