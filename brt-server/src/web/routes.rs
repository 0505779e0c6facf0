//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{ErrorKind, NetworkError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations/:id/wait", get(station_wait))
        .route("/stations/:id/occupancy", put(set_occupancy))
        .route("/routes", get(list_routes))
        .route("/routes/:code/stops", get(stop_count))
        .route("/direct", get(direct_routes))
        .route("/trunks/:name/travel-time", get(travel_time))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current wait at a station.
async fn station_wait(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WaitResponse>, AppError> {
    let network = state.network.read().await;
    let station = network.station(&id)?;

    Ok(Json(WaitResponse {
        station: station.id().to_string(),
        occupancy: station.occupancy().to_string(),
        wait_minutes: station.current_wait_minutes(),
    }))
}

/// Update a station's occupancy level.
async fn set_occupancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Result<Json<WaitResponse>, AppError> {
    let Json(req) = body?;
    let mut network = state.network.write().await;
    let wait_minutes = network.set_occupancy(&id, &req.level)?;
    let station = network.station(&id)?;
    info!(station = %station.id(), level = %station.occupancy(), "occupancy updated");

    Ok(Json(WaitResponse {
        station: station.id().to_string(),
        occupancy: station.occupancy().to_string(),
        wait_minutes,
    }))
}

/// All route codes, alphabetically.
async fn list_routes(State(state): State<AppState>) -> Json<RouteListResponse> {
    let network = state.network.read().await;
    Json(RouteListResponse {
        routes: network.route_names(),
    })
}

/// Intermediate stops between two stations on a route.
async fn stop_count(
    State(state): State<AppState>,
    Path(code): Path<String>,
    query: Result<Query<EndpointsQuery>, QueryRejection>,
) -> Result<Json<StopCountResponse>, AppError> {
    let Query(req) = query?;
    let network = state.network.read().await;
    let intermediate_stops = network.stop_count(&code, &req.origin, &req.destination)?;

    Ok(Json(StopCountResponse {
        route: code,
        origin: req.origin,
        destination: req.destination,
        intermediate_stops,
    }))
}

/// Direct routes between two stations, ranked.
async fn direct_routes(
    State(state): State<AppState>,
    query: Result<Query<EndpointsQuery>, QueryRejection>,
) -> Result<Json<DirectRoutesResponse>, AppError> {
    let Query(req) = query?;
    let network = state.network.read().await;
    let direct = network.direct_routes(&req.origin, &req.destination)?;
    if direct.skipped > 0 {
        warn!(
            origin = %req.origin,
            destination = %req.destination,
            skipped = direct.skipped,
            "direct route query skipped candidates"
        );
    }

    Ok(Json(DirectRoutesResponse::from_direct(
        &req.origin,
        &req.destination,
        &direct,
    )))
}

/// Travel time between two stations on a trunk segment.
async fn travel_time(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EndpointsQuery>, QueryRejection>,
) -> Result<Json<TravelTimeResponse>, AppError> {
    let Query(req) = query?;
    let network = state.network.read().await;
    let minutes = network.travel_time(&name, &req.origin, &req.destination)?;

    Ok(Json(TravelTimeResponse {
        trunk: name,
        origin: req.origin,
        destination: req.destination,
        minutes,
    }))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::NotFound | ErrorKind::NoPathAvailable => AppError::NotFound { message },
            ErrorKind::InternalInconsistency => AppError::Internal { message },
            ErrorKind::InvalidParameter
            | ErrorKind::EqualEndpoints
            | ErrorKind::RouteDoesNotConnect
            | ErrorKind::EmptyName
            | ErrorKind::DuplicateId
            | ErrorKind::InsufficientStops => AppError::BadRequest { message },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
