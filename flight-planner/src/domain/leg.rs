//! Flight leg type.
//!
//! A `FlightLeg` is one scheduled flight between two cities. Legs are shared
//! between the route index groupings via `Arc`, so they are immutable once
//! built.

use std::fmt;

use super::{Airline, City, ClockTime, Price, Segment};

/// One scheduled flight on a segment.
///
/// Departure and arrival are wall-clock times within one implicit day.
/// `departure <= arrival` is not enforced: a leg that appears to land before
/// it takes off simply has a negative [`duration_minutes`](Self::duration_minutes).
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{Airline, City, ClockTime, FlightLeg, Price, Segment};
///
/// let leg = FlightLeg::new(
///     Airline::parse("JU").unwrap(),
///     Segment::new(City::parse("Beograd").unwrap(), City::parse("Pariz").unwrap()),
///     ClockTime::parse("08:00").unwrap(),
///     ClockTime::parse("10:30").unwrap(),
///     Price::parse("120").unwrap(),
/// );
///
/// assert_eq!(leg.duration_minutes(), 150);
/// assert_eq!(leg.to_string(), "08:00-10:30,120.00");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLeg {
    airline: Airline,
    segment: Segment,
    departure: ClockTime,
    arrival: ClockTime,
    price: Price,
}

impl FlightLeg {
    /// Construct a leg from already-validated parts.
    pub fn new(
        airline: Airline,
        segment: Segment,
        departure: ClockTime,
        arrival: ClockTime,
        price: Price,
    ) -> Self {
        Self {
            airline,
            segment,
            departure,
            arrival,
            price,
        }
    }

    /// Returns the operating airline.
    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    /// Returns the city pair this leg flies.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Returns the departure city.
    pub fn origin(&self) -> &City {
        self.segment.origin()
    }

    /// Returns the arrival city.
    pub fn destination(&self) -> &City {
        self.segment.destination()
    }

    /// Returns the departure time as written in the catalog.
    pub fn departure(&self) -> &ClockTime {
        &self.departure
    }

    /// Returns the arrival time as written in the catalog.
    pub fn arrival(&self) -> &ClockTime {
        &self.arrival
    }

    /// Departure as minutes since midnight.
    pub fn departure_minute(&self) -> u16 {
        self.departure.minute_of_day()
    }

    /// Arrival as minutes since midnight.
    pub fn arrival_minute(&self) -> u16 {
        self.arrival.minute_of_day()
    }

    /// Flight time in minutes. Negative if the arrival precedes departure.
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.arrival_minute()) - i32::from(self.departure_minute())
    }

    /// Returns the listed fare.
    pub fn price(&self) -> Price {
        self.price
    }
}

/// Renders the schedule as `HH:MM-HH:MM,PRICE`, without the airline.
impl fmt::Display for FlightLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{},{}", self.departure, self.arrival, self.price)
    }
}
