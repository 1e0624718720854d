//! Fastest-route planner over the schedule graph.
//!
//! Implements a layover-aware variant of Dijkstra's algorithm: the cost
//! of taking a leg is its travel time plus the time spent waiting at the
//! station for its scheduled departure, both of which wrap across
//! midnight.

mod search;

pub use search::{BrokenTrail, FastestRoute, SearchError, fastest_route};
