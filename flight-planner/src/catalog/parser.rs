//! Flight catalog decoder.
//!
//! The catalog is line-oriented, one record per line:
//!
//! ```text
//! AIRLINE|ORIGIN->DESTINATION|HH:MM-HH:MM,PRICE;HH:MM-HH:MM,PRICE
//! ```
//!
//! Blank lines are skipped. Every field is trimmed. Any grammar violation
//! fails the whole catalog.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::domain::{Airline, City, ClockTime, DomainError, FlightLeg, Price, Segment};

use super::error::{CatalogError, RecordError};

/// Separator between origin and destination in a route.
pub(crate) const ROUTE_SEPARATOR: &str = "->";

/// Load and decode the catalog at `path`.
///
/// A missing file is reported as [`CatalogError::NotFound`], distinct from
/// every other failure.
pub fn load_catalog(path: &Path) -> Result<Vec<FlightLeg>, CatalogError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io(err),
    })?;

    let legs = parse_catalog(BufReader::new(file))?;
    debug!(path = %path.display(), legs = legs.len(), "loaded catalog");

    Ok(legs)
}

/// Decode a catalog from any buffered reader.
///
/// Legs are returned in file order: records top to bottom, and within a
/// record in the order they were listed.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Vec<FlightLeg>, CatalogError> {
    let mut legs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let parsed = parse_record(record).map_err(|source| CatalogError::Malformed {
            line: idx + 1,
            source,
        })?;
        trace!(line = idx + 1, legs = parsed.len(), "parsed record");
        legs.extend(parsed);
    }

    Ok(legs)
}

/// Decode one non-blank catalog line into its legs.
///
/// A record whose flight list holds only blank entries is valid and yields
/// no legs.
pub fn parse_record(line: &str) -> Result<Vec<FlightLeg>, RecordError> {
    let fields: Vec<&str> = line.split('|').collect();
    let [airline, route, flights] = fields.as_slice() else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let airline = Airline::parse(airline).map_err(DomainError::from)?;
    let segment = parse_route(route)?;

    flights
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_flight(token, &airline, &segment))
        .collect()
}

/// Parse `ORIGIN->DESTINATION`.
fn parse_route(route: &str) -> Result<Segment, RecordError> {
    let cities: Vec<&str> = route.split(ROUTE_SEPARATOR).collect();
    let [origin, destination] = cities.as_slice() else {
        return Err(RecordError::Route);
    };

    let origin = City::parse(origin).map_err(DomainError::from)?;
    let destination = City::parse(destination).map_err(DomainError::from)?;

    Ok(Segment::new(origin, destination))
}

/// Parse `HH:MM-HH:MM,PRICE`.
fn parse_flight(
    token: &str,
    airline: &Airline,
    segment: &Segment,
) -> Result<FlightLeg, RecordError> {
    let malformed = || RecordError::Flight(token.to_string());

    let (times, price) = token.split_once(',').ok_or_else(malformed)?;
    let (departure, arrival) = times.split_once('-').ok_or_else(malformed)?;

    let departure = ClockTime::parse(departure.trim()).map_err(DomainError::from)?;
    let arrival = ClockTime::parse(arrival.trim()).map_err(DomainError::from)?;
    let price = Price::parse(price).map_err(DomainError::from)?;

    Ok(FlightLeg::new(
        airline.clone(),
        segment.clone(),
        departure,
        arrival,
        price,
    ))
}
