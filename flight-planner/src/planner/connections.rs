//! One-stop connection resolver.
//!
//! Given an origin and a destination, finds every city that can serve as a
//! single transfer point and pairs each inbound leg with the outbound legs
//! that depart strictly after it lands.
//!
//! Resolution runs in two phases: first every candidate transfer city is
//! resolved into its inbound legs and their feasible outbound suffixes, then
//! cities and inbound legs that produced nothing are filtered out.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{City, FlightLeg, Price};

use super::route_index::RouteIndex;

/// Locates the feasible outbound suffix for a given arrival minute.
type SuffixFinder = for<'a> fn(&'a [Arc<FlightLeg>], u16) -> &'a [Arc<FlightLeg>];

/// One feasible pairing of an inbound and an outbound leg.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionCandidate<'a> {
    inbound: &'a FlightLeg,
    outbound: &'a FlightLeg,
}

impl<'a> ConnectionCandidate<'a> {
    /// Leg flown from the origin to the transfer city.
    pub fn inbound(&self) -> &'a FlightLeg {
        self.inbound
    }

    /// Leg flown from the transfer city to the destination.
    pub fn outbound(&self) -> &'a FlightLeg {
        self.outbound
    }

    /// Minutes spent at the transfer city. Always positive.
    pub fn layover_minutes(&self) -> u16 {
        self.outbound.departure_minute() - self.inbound.arrival_minute()
    }

    /// Combined fare of both legs.
    pub fn total_price(&self) -> Price {
        self.inbound.price() + self.outbound.price()
    }
}

/// An inbound leg together with every outbound leg it can connect to.
#[derive(Debug, Clone)]
pub struct InboundConnections<'a> {
    inbound: &'a FlightLeg,
    outbound: &'a [Arc<FlightLeg>],
}

impl<'a> InboundConnections<'a> {
    /// The inbound leg.
    pub fn inbound(&self) -> &'a FlightLeg {
        self.inbound
    }

    /// Feasible outbound legs, in canonical order.
    pub fn outbound(&self) -> &'a [Arc<FlightLeg>] {
        self.outbound
    }

    /// Each feasible pairing as a candidate.
    pub fn candidates(&self) -> impl Iterator<Item = ConnectionCandidate<'a>> + '_ {
        self.outbound.iter().map(|outbound| ConnectionCandidate {
            inbound: self.inbound,
            outbound,
        })
    }
}

/// A transfer city with at least one feasible connection.
#[derive(Debug, Clone)]
pub struct TransferPoint<'a> {
    city: &'a City,
    connections: Vec<InboundConnections<'a>>,
}

impl<'a> TransferPoint<'a> {
    /// The transfer city.
    pub fn city(&self) -> &'a City {
        self.city
    }

    /// Inbound legs with a non-empty feasible suffix, in canonical order.
    pub fn connections(&self) -> &[InboundConnections<'a>] {
        &self.connections
    }

    /// Total number of feasible pairings through this city.
    pub fn candidate_count(&self) -> usize {
        self.connections.iter().map(|c| c.outbound.len()).sum()
    }

    /// Every feasible pairing, inbound-major.
    pub fn candidates(&self) -> impl Iterator<Item = ConnectionCandidate<'a>> + '_ {
        self.connections.iter().flat_map(InboundConnections::candidates)
    }
}

/// Cities with a leg from `origin` and a leg to `destination`, in
/// lexicographic order.
///
/// The origin and destination themselves are never transfer cities.
pub fn transfer_cities<'a>(
    index: &'a RouteIndex,
    origin: &City,
    destination: &City,
) -> Vec<&'a City> {
    if !index.is_served(destination) {
        return Vec::new();
    }

    index
        .destinations_from(origin)
        .filter(|city| *city != origin && *city != destination)
        .filter(|city| index.has_segment(city, destination))
        .collect()
}

/// Outbound legs departing strictly after `arrival_minute`.
///
/// `outbound` must be in canonical order, which makes the feasible legs a
/// suffix of it.
pub fn feasible_suffix(outbound: &[Arc<FlightLeg>], arrival_minute: u16) -> &[Arc<FlightLeg>] {
    let start = outbound.partition_point(|leg| leg.departure_minute() <= arrival_minute);
    &outbound[start..]
}

/// Linear-scan equivalent of [`feasible_suffix`].
pub fn feasible_suffix_linear(
    outbound: &[Arc<FlightLeg>],
    arrival_minute: u16,
) -> &[Arc<FlightLeg>] {
    let start = outbound
        .iter()
        .position(|leg| leg.departure_minute() > arrival_minute)
        .unwrap_or(outbound.len());
    &outbound[start..]
}

/// Resolve every one-stop connection from `origin` to `destination`.
///
/// Transfer points come out in lexicographic city order; within each, inbound
/// legs and their outbound legs keep canonical order. Cities and inbound legs
/// without a feasible pairing are omitted.
///
/// # Examples
///
/// ```
/// use flight_planner::catalog::parse_catalog;
/// use flight_planner::domain::City;
/// use flight_planner::planner::{resolve, RouteIndex};
///
/// let catalog = "AA|X->M|08:00-09:00,50\nBB|M->Y|09:30-11:00,60\nCC|M->Y|08:30-10:00,40\n";
/// let index = RouteIndex::build(parse_catalog(catalog.as_bytes()).unwrap());
///
/// let origin = City::parse("X").unwrap();
/// let destination = City::parse("Y").unwrap();
/// let points = resolve(&index, &origin, &destination);
///
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].city().as_str(), "M");
/// let outbound = points[0].connections()[0].outbound();
/// assert_eq!(outbound.len(), 1);
/// assert_eq!(outbound[0].airline().as_str(), "BB");
/// ```
pub fn resolve<'a>(
    index: &'a RouteIndex,
    origin: &City,
    destination: &City,
) -> Vec<TransferPoint<'a>> {
    resolve_with(index, origin, destination, feasible_suffix)
}

/// [`resolve`] using a linear scan for the feasible suffix.
pub fn resolve_linear<'a>(
    index: &'a RouteIndex,
    origin: &City,
    destination: &City,
) -> Vec<TransferPoint<'a>> {
    resolve_with(index, origin, destination, feasible_suffix_linear)
}

fn resolve_with<'a>(
    index: &'a RouteIndex,
    origin: &City,
    destination: &City,
    suffix: SuffixFinder,
) -> Vec<TransferPoint<'a>> {
    let cities = transfer_cities(index, origin, destination);
    debug!(%origin, %destination, candidates = cities.len(), "resolving connections");

    // Phase one: pair every inbound leg with its feasible suffix
    let resolved: Vec<TransferPoint<'a>> = cities
        .into_iter()
        .map(|city| {
            let inbound = index.flights(origin, city);
            let outbound = index.flights(city, destination);

            let connections = inbound
                .iter()
                .map(|leg| InboundConnections {
                    inbound: leg,
                    outbound: suffix(outbound, leg.arrival_minute()),
                })
                .collect();

            TransferPoint { city, connections }
        })
        .collect();

    // Phase two: drop inbound legs and cities with nothing feasible
    let points: Vec<TransferPoint<'a>> = resolved
        .into_iter()
        .filter_map(|mut point| {
            point.connections.retain(|c| !c.outbound.is_empty());
            if point.connections.is_empty() {
                trace!(city = %point.city, "no feasible connections");
                return None;
            }
            Some(point)
        })
        .collect();

    debug!(
        transfer_points = points.len(),
        pairs = points.iter().map(TransferPoint::candidate_count).sum::<usize>(),
        "resolved connections"
    );

    points
}
