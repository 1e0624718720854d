//! Web layer for the route server.
//!
//! Provides HTTP endpoints for loading the timetable, querying fastest
//! paths, and allocating seats.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
