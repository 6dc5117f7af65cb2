//! Plain-text reports.
//!
//! Two artifacts are produced. The direct report lists every segment in the
//! index:
//!
//! ```text
//! ORIGIN->DESTINATION
//! AIRLINE|HH:MM-HH:MM,PRICE;HH:MM-HH:MM,PRICE
//! ```
//!
//! The connections report lists every transfer point for one query:
//!
//! ```text
//! ORIGIN->MED->DESTINATION
//! ORIGIN->MED|AIRLINE|HH:MM-HH:MM,PRICE
//! MED->DESTINATION|AIRLINE|HH:MM-HH:MM,PRICE
//! ```
//!
//! Every line, including the last, ends with `\n`.

use std::fmt;

use crate::catalog::ROUTE_SEPARATOR;
use crate::domain::{City, FlightLeg};
use crate::planner::{RouteIndex, TransferPoint};

/// Direct flights for every segment of an index.
#[derive(Debug, Clone, Copy)]
pub struct DirectReport<'a> {
    index: &'a RouteIndex,
}

impl<'a> DirectReport<'a> {
    /// Create a report over every segment of `index`.
    pub fn new(index: &'a RouteIndex) -> Self {
        Self { index }
    }
}

impl fmt::Display for DirectReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (origin, destination, flights) in self.index.segments() {
            writeln!(f, "{origin}{ROUTE_SEPARATOR}{destination}")?;

            for (airline, legs) in flights.airlines() {
                write!(f, "{airline}|")?;
                for (i, leg) in legs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{leg}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// One-stop connections for a single origin and destination.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionsReport<'a> {
    origin: &'a City,
    destination: &'a City,
    points: &'a [TransferPoint<'a>],
}

impl<'a> ConnectionsReport<'a> {
    /// Create a report over resolved transfer points.
    pub fn new(
        origin: &'a City,
        destination: &'a City,
        points: &'a [TransferPoint<'a>],
    ) -> Self {
        Self {
            origin,
            destination,
            points,
        }
    }
}

impl fmt::Display for ConnectionsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (origin, destination) = (self.origin, self.destination);

        for point in self.points {
            let med = point.city();
            writeln!(f, "{origin}{ROUTE_SEPARATOR}{med}{ROUTE_SEPARATOR}{destination}")?;

            for connection in point.connections() {
                write_leg_line(f, origin, med, connection.inbound())?;
                for outbound in connection.outbound() {
                    write_leg_line(f, med, destination, outbound)?;
                }
            }
        }
        Ok(())
    }
}

/// `FROM->TO|AIRLINE|HH:MM-HH:MM,PRICE`
fn write_leg_line(
    f: &mut fmt::Formatter<'_>,
    from: &City,
    to: &City,
    leg: &FlightLeg,
) -> fmt::Result {
    writeln!(f, "{from}{ROUTE_SEPARATOR}{to}|{}|{leg}", leg.airline())
}

/// Render the direct-flights report.
pub fn render_direct(index: &RouteIndex) -> String {
    DirectReport::new(index).to_string()
}

/// Render the one-stop connections report.
pub fn render_connections(
    origin: &City,
    destination: &City,
    points: &[TransferPoint<'_>],
) -> String {
    ConnectionsReport::new(origin, destination, points).to_string()
}
