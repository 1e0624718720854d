//! The schedule graph: scheduled trip legs keyed by origin station.
//!
//! This is a timetable, not a simple weighted graph: multiple parallel
//! legs between the same pair of stations at different times of day are
//! expected. Stations exist implicitly, discovered from the legs that
//! mention them.

use std::collections::{HashMap, HashSet};

use crate::domain::{Station, TimeOfDay};

/// A directed trip leg between two stations.
///
/// `duration` is the wraparound-adjusted travel time in minutes: legs
/// whose arrival time of day is earlier than their departure cross
/// midnight, so the duration is always in `[0, 1440)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLeg {
    /// Destination station.
    pub to: Station,

    /// Scheduled departure time of day.
    pub departure: TimeOfDay,

    /// Scheduled arrival time of day.
    pub arrival: TimeOfDay,

    /// Travel time in minutes, wraparound-adjusted.
    pub duration: u32,
}

/// A timetable graph of scheduled trip legs, keyed by origin station.
///
/// The graph is rebuilt wholesale per scenario: callers [`reset`] it,
/// insert all known legs, then run queries against it. One caller owns
/// the graph; it must not be mutated while a query is in flight.
///
/// [`reset`]: ScheduleGraph::reset
#[derive(Debug, Clone, Default)]
pub struct ScheduleGraph {
    legs: HashMap<Station, Vec<TripLeg>>,
}

impl ScheduleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all trip legs. Idempotent.
    pub fn reset(&mut self) {
        self.legs.clear();
    }

    /// Append a trip leg from `from` to `to`.
    ///
    /// Both stations are created implicitly if not seen before. The
    /// leg's duration is computed from the departure and arrival times,
    /// adding a day when the leg crosses midnight.
    pub fn add_leg(
        &mut self,
        from: Station,
        to: Station,
        departure: TimeOfDay,
        arrival: TimeOfDay,
    ) {
        let duration = departure.until(arrival);
        self.legs.entry(from).or_default().push(TripLeg {
            to,
            departure,
            arrival,
            duration,
        });
    }

    /// All stations that appear as an origin or destination of any leg.
    pub fn stops(&self) -> HashSet<&Station> {
        let mut stops: HashSet<&Station> = self.legs.keys().collect();
        for legs in self.legs.values() {
            stops.extend(legs.iter().map(|leg| &leg.to));
        }
        stops
    }

    /// Whether `station` appears anywhere in the timetable.
    pub fn contains_stop(&self, station: &Station) -> bool {
        self.legs.contains_key(station)
            || self
                .legs
                .values()
                .any(|legs| legs.iter().any(|leg| &leg.to == station))
    }

    /// Outgoing legs from a station. Empty for unknown stations.
    pub fn legs_from(&self, station: &Station) -> &[TripLeg] {
        self.legs.get(station).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of stored legs.
    pub fn len(&self) -> usize {
        self.legs.values().map(Vec::len).sum()
    }

    /// Returns true if no legs are stored.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// A small demo timetable over Indian long-distance stations.
///
/// Used by the server binary as the initial graph, so the API is
/// queryable before any legs have been loaded.
pub fn sample_network() -> ScheduleGraph {
    let mut graph = ScheduleGraph::new();

    // Station codes: NDLS New Delhi, BCT Mumbai Central, HWH Howrah,
    // MAS Chennai Central, SBC Bengaluru, NGP Nagpur, BPL Bhopal.
    add(&mut graph, "NDLS", "BPL", "06:00", "14:05");
    add(&mut graph, "BPL", "NGP", "14:45", "20:30");
    add(&mut graph, "NGP", "BCT", "21:15", "09:40"); // overnight
    add(&mut graph, "NDLS", "BCT", "16:25", "08:15"); // overnight direct
    add(&mut graph, "NGP", "MAS", "22:00", "15:50"); // overnight
    add(&mut graph, "MAS", "SBC", "17:30", "22:25");
    add(&mut graph, "HWH", "NGP", "08:30", "02:10"); // overnight
    add(&mut graph, "NDLS", "HWH", "17:00", "10:05"); // overnight

    graph
}

fn add(graph: &mut ScheduleGraph, from: &str, to: &str, departure: &str, arrival: &str) {
    if let (Ok(from), Ok(to), Ok(dep), Ok(arr)) = (
        Station::parse(from),
        Station::parse(to),
        TimeOfDay::parse_hhmm(departure),
        TimeOfDay::parse_hhmm(arrival),
    ) {
        graph.add_leg(from, to, dep, arr);
    }
}
