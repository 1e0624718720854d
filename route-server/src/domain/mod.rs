//! Domain types for the route server.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod station;
mod time;

pub use station::{InvalidStation, Station};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};
