//! Human-readable route summaries.
//!
//! Turns search outcomes into the display strings shown to callers.
//! Failure outcomes are rendered as descriptive messages, not errors:
//! a query for an unknown or unreachable station is an ordinary answer.

use crate::domain::Station;
use crate::planner::{FastestRoute, SearchError, fastest_route};
use crate::timetable::ScheduleGraph;

/// Run a fastest-path query and render the outcome as a display string.
///
/// This is the one-call surface for hosts that only want the text:
/// success, unknown origin and unreachable destination all come back as
/// messages in the fixed formats of [`render`].
pub fn summarize(graph: &ScheduleGraph, origin: &Station, destination: &Station) -> String {
    render(&fastest_route(graph, origin, destination))
}

/// Render a search outcome as a display string.
///
/// Formats:
/// - success: `Fastest Path: A -> B -> C (Total time: 2h 30m)`
/// - unknown origin: `Error: Starting station 'X' not found in routes.`
/// - unreachable: `No path found from A to Z.`
/// - broken predecessor trail (internal bug, never silently truncated):
///   `Error: path reconstruction failed between A and C.`
pub fn render(result: &Result<FastestRoute, SearchError>) -> String {
    match result {
        Ok(route) => match route.stop_sequence() {
            Ok(stops) => {
                let path = stops
                    .iter()
                    .map(Station::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                format!(
                    "Fastest Path: {} (Total time: {})",
                    path,
                    format_elapsed(route.elapsed_minutes())
                )
            }
            Err(_) => format!(
                "Error: path reconstruction failed between {} and {}.",
                route.origin(),
                route.destination()
            ),
        },
        Err(SearchError::UnknownOrigin(origin)) => {
            format!("Error: Starting station '{origin}' not found in routes.")
        }
        Err(SearchError::NoPath {
            origin,
            destination,
        }) => {
            format!("No path found from {origin} to {destination}.")
        }
    }
}

/// Format a total elapsed time in minutes as `Hh Mm`.
pub fn format_elapsed(total_minutes: u32) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
