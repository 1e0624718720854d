//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Request to add one trip leg to the timetable.
#[derive(Debug, Deserialize)]
pub struct AddLegRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Scheduled departure in HH:MM format
    pub departure: String,

    /// Scheduled arrival in HH:MM format
    pub arrival: String,
}

/// Current size of the timetable graph.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Number of distinct stations
    pub stops: usize,

    /// Number of stored trip legs
    pub legs: usize,
}

/// Query for the fastest path between two stations.
#[derive(Debug, Deserialize)]
pub struct FastestPathRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// Result of a fastest-path query.
///
/// `message` is always present and carries the display string verbatim,
/// including the descriptive failure messages. The structured fields
/// are set only when a route was found.
#[derive(Debug, Serialize)]
pub struct FastestPathResponse {
    /// Display string for the outcome
    pub message: String,

    /// Ordered stop sequence, origin first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<String>>,

    /// Total elapsed minutes, travel plus layovers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u32>,
}

/// Request to allocate a seat in a coach.
#[derive(Debug, Deserialize)]
pub struct SeatRequest {
    /// Already-booked seat numbers in this coach
    #[serde(default)]
    pub occupied: Vec<u32>,

    /// Total seats in the coach
    pub total_seats: u32,

    /// Inventory id of the coach's first seat
    pub seat_id_start: u32,

    /// Berth preference: ANY, LOWER, MIDDLE, UPPER or SIDE
    pub preference: Option<String>,
}

/// Result of a seat allocation.
///
/// `status` is `"CNF"` for a confirmed seat and `"WL"` for waitlisted;
/// the remaining fields are set only on confirmation.
#[derive(Debug, Serialize)]
pub struct SeatResponse {
    /// CNF or WL
    pub status: String,

    /// Inventory id of the assigned seat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_id: Option<u32>,

    /// 1-based seat number within the coach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<u32>,

    /// Berth kind, e.g. "LOWER" or "SIDE_UPPER"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub berth_type: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}
