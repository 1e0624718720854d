//! Time-dependent shortest-path search.
//!
//! A priority-first relaxation over the timetable. The elapsed time to
//! reach a station is travel time plus layover: at every station except
//! the origin, the traveler waits for the next occurrence of each leg's
//! scheduled departure time of day. The traveler is assumed present and
//! ready at the origin, so the first leg incurs no wait.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{Station, TimeOfDay};
use crate::timetable::ScheduleGraph;

/// Error from fastest-route search.
///
/// Both conditions are ordinary query outcomes, reported to the caller
/// and never escalated; the solver has no partial-failure state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The origin station appears nowhere in the timetable. Distinct
    /// from `NoPath`: the station is not merely unreachable, it is
    /// unknown.
    #[error("starting station '{0}' is not in the timetable")]
    UnknownOrigin(Station),

    /// The destination is not connected from the origin.
    #[error("no path from {origin} to {destination}")]
    NoPath {
        origin: Station,
        destination: Station,
    },
}

/// Internal inconsistency: the predecessor trail broke before reaching
/// the origin. Indicates a search bug, not a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("predecessor trail broken at {stop} before reaching {origin}")]
pub struct BrokenTrail {
    pub stop: Station,
    pub origin: Station,
}

/// A fastest route between two stations, with enough state to
/// reconstruct the full stop sequence.
#[derive(Debug, Clone)]
pub struct FastestRoute {
    origin: Station,
    destination: Station,
    elapsed: u32,
    predecessors: HashMap<Station, Station>,
}

impl FastestRoute {
    /// The origin station of the query.
    pub fn origin(&self) -> &Station {
        &self.origin
    }

    /// The destination station of the query.
    pub fn destination(&self) -> &Station {
        &self.destination
    }

    /// Total elapsed minutes, travel plus layovers.
    pub fn elapsed_minutes(&self) -> u32 {
        self.elapsed
    }

    /// Reconstruct the ordered stop sequence, origin first.
    ///
    /// Walks the predecessor trail backward from the destination. A stop
    /// without a predecessor that is not the origin means the trail is
    /// broken; that is surfaced as [`BrokenTrail`] rather than silently
    /// truncating the route.
    pub fn stop_sequence(&self) -> Result<Vec<Station>, BrokenTrail> {
        let mut stops = vec![self.destination.clone()];
        let mut current = &self.destination;

        while current != &self.origin {
            match self.predecessors.get(current) {
                Some(previous) => {
                    stops.push(previous.clone());
                    current = previous;
                }
                None => {
                    return Err(BrokenTrail {
                        stop: current.clone(),
                        origin: self.origin.clone(),
                    });
                }
            }
        }

        stops.reverse();
        Ok(stops)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        origin: Station,
        destination: Station,
        elapsed: u32,
        predecessors: HashMap<Station, Station>,
    ) -> Self {
        Self {
            origin,
            destination,
            elapsed,
            predecessors,
        }
    }
}

/// A frontier entry: a station reachable in `elapsed` minutes.
///
/// Ordered as a min-heap entry on elapsed time (ties broken by station
/// name so the ordering is total; callers must not rely on any
/// particular tie-break).
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    elapsed: u32,
    stop: Station,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .elapsed
            .cmp(&self.elapsed)
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the fastest route from `origin` to `destination`.
///
/// Runs Dijkstra with a layover-aware edge cost. Each relaxation records
/// the arrival time of day at the reached station; later relaxations
/// from that station wait from that clock time until the outgoing leg's
/// departure, wrapping into the next day if the departure has passed.
/// The first leg out of the origin incurs no wait: the traveler boards
/// it at its scheduled departure.
///
/// Because wait and duration are both non-negative, elapsed times pop
/// off the frontier in non-decreasing order and the first pop of the
/// destination is optimal. Superseded frontier entries are not removed
/// in place; they are discarded lazily when popped.
pub fn fastest_route(
    graph: &ScheduleGraph,
    origin: &Station,
    destination: &Station,
) -> Result<FastestRoute, SearchError> {
    if !graph.contains_stop(origin) {
        return Err(SearchError::UnknownOrigin(origin.clone()));
    }

    let mut best: HashMap<Station, u32> = HashMap::new();
    let mut arrival_clock: HashMap<Station, TimeOfDay> = HashMap::new();
    let mut predecessors: HashMap<Station, Station> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(origin.clone(), 0);
    arrival_clock.insert(origin.clone(), TimeOfDay::MIDNIGHT);
    frontier.push(FrontierEntry {
        elapsed: 0,
        stop: origin.clone(),
    });

    let mut popped = 0usize;

    while let Some(FrontierEntry { elapsed, stop }) = frontier.pop() {
        popped += 1;

        // Stale entry: a cheaper relaxation already superseded it.
        if best.get(&stop).is_some_and(|&b| elapsed > b) {
            continue;
        }

        if &stop == destination {
            debug!(%origin, %destination, elapsed, popped, "fastest route found");
            return Ok(FastestRoute {
                origin: origin.clone(),
                destination: destination.clone(),
                elapsed,
                predecessors,
            });
        }

        let clock = arrival_clock
            .get(&stop)
            .copied()
            .unwrap_or(TimeOfDay::MIDNIGHT);

        for leg in graph.legs_from(&stop) {
            let wait = if &stop == origin {
                0
            } else {
                clock.until(leg.departure)
            };
            let candidate = elapsed + leg.duration + wait;

            let improves = best.get(&leg.to).is_none_or(|&b| candidate < b);
            if improves {
                trace!(from = %stop, to = %leg.to, candidate, wait, "relaxed leg");
                best.insert(leg.to.clone(), candidate);
                predecessors.insert(leg.to.clone(), stop.clone());
                arrival_clock.insert(leg.to.clone(), leg.arrival);
                frontier.push(FrontierEntry {
                    elapsed: candidate,
                    stop: leg.to.clone(),
                });
            }
        }
    }

    debug!(%origin, %destination, popped, "frontier exhausted, no path");
    Err(SearchError::NoPath {
        origin: origin.clone(),
        destination: destination.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stn(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn tod(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn graph_of(legs: &[(&str, &str, &str, &str)]) -> ScheduleGraph {
        let mut graph = ScheduleGraph::new();
        for (from, to, dep, arr) in legs {
            graph.add_leg(stn(from), stn(to), tod(dep), tod(arr));
        }
        graph
    }

    fn sequence(route: &FastestRoute) -> Vec<String> {
        route
            .stop_sequence()
            .unwrap()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect()
    }

    #[test]
    fn two_legs_with_layover() {
        // A->B 50 min travel, 50 min wait at B, B->C 50 min travel
        let graph = graph_of(&[("A", "B", "10:00", "10:50"), ("B", "C", "11:40", "12:30")]);

        let route = fastest_route(&graph, &stn("A"), &stn("C")).unwrap();
        assert_eq!(route.elapsed_minutes(), 150);
        assert_eq!(sequence(&route), ["A", "B", "C"]);
    }

    #[test]
    fn first_leg_has_no_wait() {
        // A single late-evening departure: elapsed is just the travel
        // time, not the wait from midnight until 23:00.
        let graph = graph_of(&[("A", "B", "23:00", "23:45")]);

        let route = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert_eq!(route.elapsed_minutes(), 45);
    }

    #[test]
    fn overnight_leg() {
        let graph = graph_of(&[("A", "B", "23:50", "00:10")]);

        let route = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert_eq!(route.elapsed_minutes(), 20);
    }

    #[test]
    fn layover_wraps_past_midnight() {
        // Arrive B at 23:30; next departure 01:40 -> 130 minute wait
        let graph = graph_of(&[("A", "B", "23:00", "23:30"), ("B", "C", "01:40", "03:20")]);

        let route = fastest_route(&graph, &stn("A"), &stn("C")).unwrap();
        assert_eq!(route.elapsed_minutes(), 30 + 130 + 100);
    }

    #[test]
    fn picks_better_of_parallel_legs() {
        // Two direct trains; the later one is faster and the first leg
        // incurs no wait, so the faster one wins.
        let graph = graph_of(&[("A", "B", "06:00", "09:00"), ("A", "B", "10:00", "11:30")]);

        let route = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert_eq!(route.elapsed_minutes(), 90);
    }

    #[test]
    fn connection_beats_slow_direct() {
        // Direct takes 10h; changing at B takes 3h including the wait
        let graph = graph_of(&[
            ("A", "C", "08:00", "18:00"),
            ("A", "B", "08:00", "09:00"),
            ("B", "C", "09:30", "11:00"),
        ]);

        let route = fastest_route(&graph, &stn("A"), &stn("C")).unwrap();
        assert_eq!(route.elapsed_minutes(), 180);
        assert_eq!(sequence(&route), ["A", "B", "C"]);
    }

    #[test]
    fn stale_frontier_entries_are_discarded() {
        // B is first reached via the slow direct leg, then improved via
        // D before it is popped. The superseded frontier entry for B
        // pops before C is reached and must be skipped, not reprocessed.
        let graph = graph_of(&[
            ("A", "B", "08:00", "10:00"), // 120 min
            ("A", "D", "08:00", "08:30"), // 30 min
            ("D", "B", "08:45", "09:15"), // 15 wait + 30 travel = best 75
            ("B", "C", "18:00", "18:30"),
        ]);

        let route = fastest_route(&graph, &stn("A"), &stn("C")).unwrap();
        // A->D 30, wait 15, D->B 30 (arrives 09:15), wait until 18:00
        // is 525, B->C 30
        assert_eq!(route.elapsed_minutes(), 30 + 15 + 30 + 525 + 30);
        assert_eq!(sequence(&route), ["A", "D", "B", "C"]);
    }

    #[test]
    fn zero_duration_leg_does_not_loop() {
        // A degenerate instant edge back to the origin must not cause
        // endless relaxation; improvement is strict.
        let graph = graph_of(&[
            ("A", "A", "08:00", "08:00"),
            ("A", "B", "09:00", "10:00"),
        ]);

        let route = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert_eq!(route.elapsed_minutes(), 60);
    }

    #[test]
    fn origin_equals_destination() {
        let graph = graph_of(&[("A", "B", "08:00", "09:00")]);

        let route = fastest_route(&graph, &stn("A"), &stn("A")).unwrap();
        assert_eq!(route.elapsed_minutes(), 0);
        assert_eq!(sequence(&route), ["A"]);
    }

    #[test]
    fn unknown_origin() {
        let graph = graph_of(&[("A", "B", "08:00", "09:00")]);

        let err = fastest_route(&graph, &stn("X"), &stn("B")).unwrap_err();
        assert_eq!(err, SearchError::UnknownOrigin(stn("X")));
    }

    #[test]
    fn unknown_origin_on_empty_graph() {
        let graph = ScheduleGraph::new();

        let err = fastest_route(&graph, &stn("X"), &stn("Y")).unwrap_err();
        assert!(matches!(err, SearchError::UnknownOrigin(_)));
    }

    #[test]
    fn unreachable_destination() {
        let graph = graph_of(&[("A", "B", "08:00", "09:00")]);

        let err = fastest_route(&graph, &stn("A"), &stn("Z")).unwrap_err();
        assert_eq!(
            err,
            SearchError::NoPath {
                origin: stn("A"),
                destination: stn("Z"),
            }
        );
    }

    #[test]
    fn destination_known_but_not_connected() {
        // Z exists in the timetable but only as an origin of its own leg
        let graph = graph_of(&[("A", "B", "08:00", "09:00"), ("Z", "B", "08:00", "09:00")]);

        let err = fastest_route(&graph, &stn("A"), &stn("Z")).unwrap_err();
        assert!(matches!(err, SearchError::NoPath { .. }));
    }

    #[test]
    fn adding_a_faster_leg_improves_the_result() {
        let mut graph = ScheduleGraph::new();
        graph.add_leg(stn("A"), stn("B"), tod("08:00"), tod("12:00"));

        let slow = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert_eq!(slow.elapsed_minutes(), 240);

        graph.add_leg(stn("A"), stn("B"), tod("09:00"), tod("10:00"));
        let fast = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        assert!(fast.elapsed_minutes() <= slow.elapsed_minutes());
        assert_eq!(fast.elapsed_minutes(), 60);
    }

    #[test]
    fn triangle_property_on_relaxed_edges() {
        // best[C] must equal best[B] + wait + duration for the stored
        // predecessor leg B->C.
        let graph = graph_of(&[("A", "B", "10:00", "10:50"), ("B", "C", "11:40", "12:30")]);

        let to_b = fastest_route(&graph, &stn("A"), &stn("B")).unwrap();
        let to_c = fastest_route(&graph, &stn("A"), &stn("C")).unwrap();

        // wait at B: 10:50 -> 11:40 is 50 minutes; travel 50 minutes
        assert_eq!(to_c.elapsed_minutes(), to_b.elapsed_minutes() + 50 + 50);
    }

    #[test]
    fn broken_trail_is_reported() {
        // Hand-built inconsistent state: destination has no predecessor
        let route = FastestRoute::from_parts(stn("A"), stn("C"), 120, HashMap::new());

        let err = route.stop_sequence().unwrap_err();
        assert_eq!(err.stop, stn("C"));
        assert_eq!(err.origin, stn("A"));
    }
}
