//! Ordered city pair.

use std::fmt;

use super::City;

/// A directed city pair: the unit the route index is keyed by.
///
/// Segments order by origin, then destination, which is the order the
/// direct-flights report lists them in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    origin: City,
    destination: City,
}

impl Segment {
    /// Create a segment from `origin` to `destination`.
    pub fn new(origin: City, destination: City) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Returns the departure city.
    pub fn origin(&self) -> &City {
        &self.origin
    }

    /// Returns the arrival city.
    pub fn destination(&self) -> &City {
        &self.destination
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}
