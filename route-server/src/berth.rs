//! Seat and berth allocation.
//!
//! Standalone collaborator for the booking flow; it never touches the
//! timetable graph. Coaches use the standard 72-seat sleeper layout
//! where the berth kind of a seat follows from its position within each
//! block of eight.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The berth kind of a seat in the eight-seat block layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Berth {
    Lower,
    Middle,
    Upper,
    SideLower,
    SideUpper,
}

impl Berth {
    /// Berth kind for a 1-based seat number.
    ///
    /// Positions 1 and 4 in each block of eight are lower berths, 2 and
    /// 5 middle, 3 and 6 upper, 7 side lower, and 8 side upper.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::berth::Berth;
    ///
    /// assert_eq!(Berth::for_seat(1), Berth::Lower);
    /// assert_eq!(Berth::for_seat(7), Berth::SideLower);
    /// assert_eq!(Berth::for_seat(8), Berth::SideUpper);
    /// assert_eq!(Berth::for_seat(16), Berth::SideUpper);
    /// ```
    pub fn for_seat(seat_number: u32) -> Berth {
        match seat_number % 8 {
            1 | 4 => Berth::Lower,
            2 | 5 => Berth::Middle,
            3 | 6 => Berth::Upper,
            7 => Berth::SideLower,
            _ => Berth::SideUpper, // 0: seats 8, 16, ...
        }
    }

    /// Wire name of the berth kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Berth::Lower => "LOWER",
            Berth::Middle => "MIDDLE",
            Berth::Upper => "UPPER",
            Berth::SideLower => "SIDE_LOWER",
            Berth::SideUpper => "SIDE_UPPER",
        }
    }
}

impl fmt::Display for Berth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid berth preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid berth preference: {0}")]
pub struct InvalidPreference(String);

/// A passenger's berth preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BerthPreference {
    #[default]
    Any,
    Lower,
    Middle,
    Upper,
    Side,
}

impl BerthPreference {
    /// Whether a berth satisfies this preference.
    ///
    /// `Lower` is satisfied by side lower berths and `Upper` by side
    /// upper berths; `Side` by either side berth.
    pub fn accepts(&self, berth: Berth) -> bool {
        match self {
            BerthPreference::Any => true,
            BerthPreference::Lower => matches!(berth, Berth::Lower | Berth::SideLower),
            BerthPreference::Middle => berth == Berth::Middle,
            BerthPreference::Upper => matches!(berth, Berth::Upper | Berth::SideUpper),
            BerthPreference::Side => matches!(berth, Berth::SideLower | Berth::SideUpper),
        }
    }
}

impl FromStr for BerthPreference {
    type Err = InvalidPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ANY" => Ok(BerthPreference::Any),
            "LOWER" => Ok(BerthPreference::Lower),
            "MIDDLE" => Ok(BerthPreference::Middle),
            "UPPER" => Ok(BerthPreference::Upper),
            "SIDE" => Ok(BerthPreference::Side),
            other => Err(InvalidPreference(other.to_string())),
        }
    }
}

/// A confirmed seat assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedSeat {
    /// Inventory identifier: `seat_id_start + (seat_number - 1)`.
    pub seat_id: u32,

    /// 1-based seat number within the coach.
    pub seat_number: u32,

    /// Berth kind of the assigned seat.
    pub berth: Berth,
}

/// Outcome of a seat allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatAssignment {
    /// A seat was found and confirmed.
    Confirmed(ConfirmedSeat),

    /// The coach is full; the passenger goes on the waitlist.
    Waitlisted,
}

/// Allocate the best free seat in a coach.
///
/// Scans seat numbers `1..=total_seats` in order, first for a free seat
/// matching the preference, then (if none matches) for any free seat.
/// Returns [`SeatAssignment::Waitlisted`] when the coach is full.
pub fn allocate(
    occupied: &[u32],
    total_seats: u32,
    seat_id_start: u32,
    preference: BerthPreference,
) -> SeatAssignment {
    let booked: HashSet<u32> = occupied.iter().copied().collect();

    let preferred = (preference != BerthPreference::Any)
        .then(|| {
            (1..=total_seats)
                .find(|n| !booked.contains(n) && preference.accepts(Berth::for_seat(*n)))
        })
        .flatten();

    let chosen = preferred.or_else(|| (1..=total_seats).find(|n| !booked.contains(n)));

    match chosen {
        Some(seat_number) => SeatAssignment::Confirmed(ConfirmedSeat {
            seat_id: seat_id_start + (seat_number - 1),
            seat_number,
            berth: Berth::for_seat(seat_number),
        }),
        None => SeatAssignment::Waitlisted,
    }
}
