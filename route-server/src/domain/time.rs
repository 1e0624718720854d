//! Time-of-day handling for timetable data.
//!
//! Timetables carry departure and arrival times as times of day with no
//! date attached. Overnight trips appear to go backwards ("23:50" then
//! "00:10"); all arithmetic in this module is therefore modular over a
//! 24-hour day.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Error returned when constructing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day, stored as minutes since local midnight.
///
/// Always in `[0, 1440)` by construction. Unlike a full timestamp there
/// is no date component: the timetable repeats every day, and trips that
/// cross midnight are handled by modular arithmetic ([`TimeOfDay::until`]).
///
/// # Examples
///
/// ```
/// use route_server::domain::TimeOfDay;
///
/// let dep = TimeOfDay::parse_hhmm("23:50").unwrap();
/// let arr = TimeOfDay::parse_hhmm("00:10").unwrap();
///
/// // Forward distance wraps across midnight
/// assert_eq!(dep.until(arr), 20);
/// assert_eq!(dep.to_string(), "23:50");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the start of the timetable day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create a time from minutes since midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::from_minutes(0).is_ok());
    /// assert!(TimeOfDay::from_minutes(1439).is_ok());
    /// assert!(TimeOfDay::from_minutes(1440).is_err());
    /// ```
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::new("minutes must be in [0, 1440)"));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("14:30").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("1430").is_err());
    /// assert!(TimeOfDay::parse_hhmm("14:30:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| TimeError::new("expected HH:MM format"))?;
        Ok(TimeOfDay((time.hour() * 60 + time.minute()) as u16))
    }

    /// Convert from a [`chrono::NaiveTime`], truncating seconds.
    pub fn from_naive(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Returns minutes since midnight, in `[0, 1440)`.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.0
    }

    /// Forward distance in minutes from `self` to `other`, wrapping
    /// across midnight.
    ///
    /// This is the single primitive behind both leg duration (departure
    /// until arrival) and layover (arrival until next departure): waiting
    /// for a time of day that has already passed rolls into the next day.
    ///
    /// Always in `[0, 1440)`; the distance from a time to itself is 0.
    pub fn until(&self, other: TimeOfDay) -> u32 {
        let diff = other.0 as i32 - self.0 as i32;
        diff.rem_euclid(MINUTES_PER_DAY as i32) as u32
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(minutes in 0u16..MINUTES_PER_DAY) -> TimeOfDay {
            TimeOfDay::from_minutes(minutes).unwrap()
        }
    }

    proptest! {
        /// Any valid HH:MM string parses successfully
        #[test]
        fn valid_hhmm_parses(hour in 0u16..24, minute in 0u16..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(TimeOfDay::parse_hhmm(&s).is_ok());
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(hour in 0u16..24, minute in 0u16..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            let parsed = TimeOfDay::parse_hhmm(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u16..100, minute in 0u16..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(TimeOfDay::parse_hhmm(&s).is_err());
        }

        /// Forward distance is always within one day
        #[test]
        fn until_in_bounds(a in valid_time(), b in valid_time()) {
            prop_assert!(a.until(b) < MINUTES_PER_DAY as u32);
        }

        /// Going there and back again covers zero or one full day
        #[test]
        fn until_round_trip(a in valid_time(), b in valid_time()) {
            let total = a.until(b) + b.until(a);
            prop_assert!(total == 0 || total == MINUTES_PER_DAY as u32);
        }

        /// Distance to self is zero
        #[test]
        fn until_self_is_zero(a in valid_time()) {
            prop_assert_eq!(a.until(a), 0);
        }
    }
}
