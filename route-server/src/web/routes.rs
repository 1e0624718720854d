//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::berth::{self, BerthPreference, SeatAssignment};
use crate::domain::{Station, TimeOfDay};
use crate::planner::fastest_route;
use crate::report;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graph/reset", post(reset_graph))
        .route("/graph/legs", post(add_leg))
        .route("/routes/fastest", get(find_fastest))
        .route("/booking/seat", post(allocate_seat))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Discard all trip legs. Idempotent.
async fn reset_graph(State(state): State<AppState>) -> Result<Json<GraphSummary>, AppError> {
    let mut graph = state.graph.write().map_err(|_| AppError::lock())?;
    graph.reset();

    info!("timetable graph reset");
    Ok(Json(GraphSummary { stops: 0, legs: 0 }))
}

/// Append one trip leg to the timetable.
async fn add_leg(
    State(state): State<AppState>,
    Json(req): Json<AddLegRequest>,
) -> Result<Json<GraphSummary>, AppError> {
    let from = parse_station("from", &req.from)?;
    let to = parse_station("to", &req.to)?;
    let departure = parse_time("departure", &req.departure)?;
    let arrival = parse_time("arrival", &req.arrival)?;

    let mut graph = state.graph.write().map_err(|_| AppError::lock())?;
    graph.add_leg(from, to, departure, arrival);

    Ok(Json(GraphSummary {
        stops: graph.stops().len(),
        legs: graph.len(),
    }))
}

/// Query the fastest path between two stations.
///
/// Unknown origins and unreachable destinations are ordinary outcomes:
/// the response is a 200 whose `message` carries the descriptive text.
async fn find_fastest(
    State(state): State<AppState>,
    Query(req): Query<FastestPathRequest>,
) -> Result<Json<FastestPathResponse>, AppError> {
    let origin = parse_station("from", &req.from)?;
    let destination = parse_station("to", &req.to)?;

    let graph = state.graph.read().map_err(|_| AppError::lock())?;
    let result = fastest_route(&graph, &origin, &destination);
    let message = report::render(&result);

    let (stops, total_minutes) = match &result {
        Ok(route) => match route.stop_sequence() {
            Ok(stops) => (
                Some(stops.iter().map(|s| s.as_str().to_string()).collect()),
                Some(route.elapsed_minutes()),
            ),
            // Message already carries the reconstruction error
            Err(_) => (None, None),
        },
        Err(_) => (None, None),
    };

    Ok(Json(FastestPathResponse {
        message,
        stops,
        total_minutes,
    }))
}

/// Allocate a seat in a coach.
async fn allocate_seat(Json(req): Json<SeatRequest>) -> Result<Json<SeatResponse>, AppError> {
    let preference = match req.preference.as_deref() {
        None => BerthPreference::default(),
        Some(s) => s.parse().map_err(|_| AppError::BadRequest {
            message: format!("invalid berth preference: {s}"),
        })?,
    };

    let assignment = berth::allocate(&req.occupied, req.total_seats, req.seat_id_start, preference);

    let response = match assignment {
        SeatAssignment::Confirmed(seat) => SeatResponse {
            status: "CNF".to_string(),
            seat_id: Some(seat.seat_id),
            seat_number: Some(seat.seat_number),
            berth_type: Some(seat.berth.as_str().to_string()),
        },
        SeatAssignment::Waitlisted => SeatResponse {
            status: "WL".to_string(),
            seat_id: None,
            seat_number: None,
            berth_type: None,
        },
    };

    Ok(Json(response))
}

fn parse_station(field: &str, value: &str) -> Result<Station, AppError> {
    Station::parse(value).map_err(|e| AppError::BadRequest {
        message: format!("invalid station in '{field}': {e}"),
    })
}

fn parse_time(field: &str, value: &str) -> Result<TimeOfDay, AppError> {
    TimeOfDay::parse_hhmm(value).map_err(|e| AppError::BadRequest {
        message: format!("invalid time in '{field}': {e}"),
    })
}

/// Application-level error responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn lock() -> Self {
        AppError::Internal {
            message: "timetable lock poisoned".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
