//! Application state for the web layer.

use std::sync::{Arc, RwLock};

use crate::timetable::ScheduleGraph;

/// Shared application state.
///
/// The schedule graph itself is single-owner by design; the lock is how
/// the web layer guarantees that no request mutates the graph while a
/// query against it is in flight.
#[derive(Clone)]
pub struct AppState {
    /// The timetable graph served by this process.
    pub graph: Arc<RwLock<ScheduleGraph>>,
}

impl AppState {
    /// Create app state around an initial graph.
    pub fn new(graph: ScheduleGraph) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
        }
    }
}
