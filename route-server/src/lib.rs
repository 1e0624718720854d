//! Railway route server.
//!
//! Answers: "what is the fastest way from this station to that one,
//! given a timetable of scheduled trips?" Also allocates seats and
//! berths for confirmed bookings.

pub mod berth;
pub mod domain;
pub mod planner;
pub mod report;
pub mod timetable;
pub mod web;
