//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// An opaque station identifier.
///
/// Stations are named by whatever code the timetable uses ("NDLS",
/// "Mumbai Central", ...). The only requirement is that the name is
/// non-empty after trimming; this type guarantees that by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::Station;
///
/// let ndls = Station::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(Station::parse("  BCT ").unwrap().as_str(), "BCT");
///
/// // Empty names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Parse a station name from a string.
    ///
    /// The input is trimmed; the result must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "must be non-empty",
            });
        }
        Ok(Station(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
