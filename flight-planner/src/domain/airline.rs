//! Airline name type.

use std::fmt;

/// Error returned when parsing an invalid airline name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline: {reason}")]
pub struct InvalidAirline {
    reason: &'static str,
}

/// A carrier name as it appears in the catalog (e.g. "AirSerbia", "LH").
///
/// Names are free text. Surrounding whitespace is trimmed and the result must
/// be non-empty. Ordering is by code point, which is the order airlines are
/// listed in reports.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Airline;
///
/// let lh = Airline::parse(" LH ").unwrap();
/// assert_eq!(lh.as_str(), "LH");
///
/// // Blank names are rejected
/// assert!(Airline::parse("").is_err());
/// assert!(Airline::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Airline(String);

impl Airline {
    /// Parse an airline name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidAirline> {
        let name = s.trim();

        if name.is_empty() {
            return Err(InvalidAirline {
                reason: "name must not be empty",
            });
        }

        Ok(Airline(name.to_string()))
    }

    /// Returns the airline name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airline({})", self.as_str())
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
