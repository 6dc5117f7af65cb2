//! Route index over the flight catalog.
//!
//! Groups legs by segment so that both the direct-flight listing and the
//! connection search are map lookups rather than scans. Every list in the
//! index is kept in canonical order. The index is built once and is
//! read-only afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Airline, City, FlightLeg};

use super::ordering::{merge_canonical, sort_canonical};

/// All flights on one segment.
///
/// The same `Arc<FlightLeg>` appears once in its airline's list and once in
/// the combined list.
#[derive(Debug, Clone, Default)]
pub struct SegmentFlights {
    /// Airline -> its legs on this segment, canonical order.
    by_airline: BTreeMap<Airline, Vec<Arc<FlightLeg>>>,

    /// Every leg on this segment regardless of airline, canonical order.
    all: Vec<Arc<FlightLeg>>,
}

impl SegmentFlights {
    /// Airlines serving the segment in lexicographic order, each with its legs.
    pub fn airlines(&self) -> impl Iterator<Item = (&Airline, &[Arc<FlightLeg>])> {
        self.by_airline
            .iter()
            .map(|(airline, legs)| (airline, legs.as_slice()))
    }

    /// Legs flown by one airline. Empty if the airline does not serve the segment.
    pub fn by_airline(&self, airline: &Airline) -> &[Arc<FlightLeg>] {
        self.by_airline
            .get(airline)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every leg on the segment.
    pub fn all(&self) -> &[Arc<FlightLeg>] {
        &self.all
    }

    /// Number of legs on the segment.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// True if the segment has no legs.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn push(&mut self, leg: Arc<FlightLeg>) {
        self.by_airline
            .entry(leg.airline().clone())
            .or_default()
            .push(leg.clone());
        self.all.push(leg);
    }

    fn sort(&mut self) {
        for legs in self.by_airline.values_mut() {
            sort_canonical(legs);
        }
        sort_canonical(&mut self.all);
    }

    fn merge(self, other: Self) -> Self {
        let mut by_airline = self.by_airline;
        for (airline, legs) in other.by_airline {
            let merged = match by_airline.remove(&airline) {
                Some(existing) => merge_canonical(existing, legs),
                None => legs,
            };
            by_airline.insert(airline, merged);
        }

        Self {
            by_airline,
            all: merge_canonical(self.all, other.all),
        }
    }
}

/// Index of catalog legs keyed by `(origin, destination)`.
///
/// Lookups in both directions are O(log n): "where can I fly from X?" via the
/// forward map, and "who flies into Y?" via the reverse map.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    /// Origin -> destination -> flights.
    routes: BTreeMap<City, BTreeMap<City, SegmentFlights>>,

    /// Destination -> every origin with at least one leg into it.
    origins: HashMap<City, BTreeSet<City>>,
}

impl RouteIndex {
    /// Build the index from parsed legs.
    ///
    /// Accepts any well-formed legs without further validation. Lists are
    /// sorted with a stable sort, so legs that tie on every ordering key keep
    /// their input order.
    pub fn build<I>(legs: I) -> Self
    where
        I: IntoIterator<Item = FlightLeg>,
    {
        let mut index = Self::default();

        for leg in legs {
            index.insert(Arc::new(leg));
        }

        for destinations in index.routes.values_mut() {
            for flights in destinations.values_mut() {
                flights.sort();
            }
        }

        debug!(
            segments = index.segment_count(),
            legs = index.leg_count(),
            "built route index"
        );

        index
    }

    /// Combine two indexes built from consecutive chunks of one catalog.
    ///
    /// `self` is treated as the earlier chunk: on full ordering ties its legs
    /// come first, so `build(a).merge(build(b))` equals `build(a ++ b)`.
    pub fn merge(mut self, other: RouteIndex) -> Self {
        for (origin, destinations) in other.routes {
            let existing = self.routes.entry(origin).or_default();
            for (destination, flights) in destinations {
                let merged = match existing.remove(&destination) {
                    Some(current) => current.merge(flights),
                    None => flights,
                };
                existing.insert(destination, merged);
            }
        }

        for (destination, origins) in other.origins {
            self.origins.entry(destination).or_default().extend(origins);
        }

        self
    }

    fn insert(&mut self, leg: Arc<FlightLeg>) {
        let origin = leg.origin().clone();
        let destination = leg.destination().clone();

        self.origins
            .entry(destination.clone())
            .or_default()
            .insert(origin.clone());
        self.routes
            .entry(origin)
            .or_default()
            .entry(destination)
            .or_default()
            .push(leg);
    }

    /// All segments, ordered by origin then destination.
    pub fn segments(&self) -> impl Iterator<Item = (&City, &City, &SegmentFlights)> {
        self.routes.iter().flat_map(|(origin, destinations)| {
            destinations
                .iter()
                .map(move |(destination, flights)| (origin, destination, flights))
        })
    }

    /// Flights on one segment, if any exist.
    pub fn segment(&self, origin: &City, destination: &City) -> Option<&SegmentFlights> {
        self.routes.get(origin)?.get(destination)
    }

    /// Every leg on a segment in canonical order. Empty for unknown segments.
    pub fn flights(&self, origin: &City, destination: &City) -> &[Arc<FlightLeg>] {
        self.segment(origin, destination)
            .map(SegmentFlights::all)
            .unwrap_or(&[])
    }

    /// Cities with a direct leg from `origin`, in lexicographic order.
    pub fn destinations_from(&self, origin: &City) -> impl Iterator<Item = &City> {
        self.routes
            .get(origin)
            .into_iter()
            .flat_map(|destinations| destinations.keys())
    }

    /// Cities with a direct leg into `destination`, in lexicographic order.
    pub fn origins_to(&self, destination: &City) -> impl Iterator<Item = &City> {
        self.origins.get(destination).into_iter().flatten()
    }

    /// True if at least one leg flies from `origin` to `destination`.
    pub fn has_segment(&self, origin: &City, destination: &City) -> bool {
        self.segment(origin, destination).is_some()
    }

    /// True if `destination` is reachable directly from at least one city.
    pub fn is_served(&self, destination: &City) -> bool {
        self.origins.contains_key(destination)
    }

    /// Number of distinct segments.
    pub fn segment_count(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    /// Total number of legs across all segments.
    pub fn leg_count(&self) -> usize {
        self.segments().map(|(_, _, flights)| flights.len()).sum()
    }

    /// True if the index holds no legs.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ClockTime, Price, Segment};
    use crate::planner::ordering::is_canonical;
    use crate::planner::resolve;
    use crate::report::{render_connections, render_direct};
    use proptest::prelude::*;

    prop_compose! {
        fn arb_leg()(
            airline in "[A-C]",
            from in "[P-S]",
            to in "[P-S]",
            dep in 0u16..1440,
            len in 0u16..300,
            cents in 0u32..1000,
        ) -> FlightLeg {
            let arr = (dep + len).min(1439);
            FlightLeg::new(
                Airline::parse(&airline).unwrap(),
                Segment::new(City::parse(&from).unwrap(), City::parse(&to).unwrap()),
                ClockTime::parse(&format!("{:02}:{:02}", dep / 60, dep % 60)).unwrap(),
                ClockTime::parse(&format!("{:02}:{:02}", arr / 60, arr % 60)).unwrap(),
                Price::new(f64::from(cents) / 100.0).unwrap(),
            )
        }
    }

    proptest! {
        /// Indexed segments are exactly the distinct pairs in the input
        #[test]
        fn segments_match_input_pairs(legs in prop::collection::vec(arb_leg(), 0..40)) {
            let expected: BTreeSet<(String, String)> = legs
                .iter()
                .map(|l| (l.origin().to_string(), l.destination().to_string()))
                .collect();

            let index = RouteIndex::build(legs);
            let actual: BTreeSet<(String, String)> = index
                .segments()
                .map(|(o, d, _)| (o.to_string(), d.to_string()))
                .collect();

            prop_assert_eq!(actual, expected);
        }

        /// Every list in the index is canonical and no leg is lost
        #[test]
        fn lists_canonical_and_complete(legs in prop::collection::vec(arb_leg(), 0..40)) {
            let total = legs.len();
            let index = RouteIndex::build(legs);

            let mut per_airline_total = 0;
            for (_, _, flights) in index.segments() {
                prop_assert!(is_canonical(flights.all()));
                for (airline, airline_legs) in flights.airlines() {
                    prop_assert!(is_canonical(airline_legs));
                    prop_assert!(airline_legs.iter().all(|l| l.airline() == airline));
                    per_airline_total += airline_legs.len();
                }
            }

            prop_assert_eq!(index.leg_count(), total);
            prop_assert_eq!(per_airline_total, total);
        }

        /// Building twice from the same legs renders byte-identical reports
        #[test]
        fn rebuild_renders_identically(legs in prop::collection::vec(arb_leg(), 0..40)) {
            let first = RouteIndex::build(legs.clone());
            let second = RouteIndex::build(legs);

            prop_assert_eq!(render_direct(&first), render_direct(&second));

            for origin in ["P", "Q", "R", "S"] {
                for destination in ["P", "Q", "R", "S"] {
                    let origin = City::parse(origin).unwrap();
                    let destination = City::parse(destination).unwrap();
                    let a = resolve(&first, &origin, &destination);
                    let b = resolve(&second, &origin, &destination);

                    prop_assert_eq!(
                        render_connections(&origin, &destination, &a),
                        render_connections(&origin, &destination, &b)
                    );
                }
            }
        }

        /// Forward and reverse lookups agree
        #[test]
        fn reverse_map_consistent(legs in prop::collection::vec(arb_leg(), 0..40)) {
            let index = RouteIndex::build(legs);

            for (origin, destination, _) in index.segments() {
                prop_assert!(index.origins_to(destination).any(|c| c == origin));
            }
            for (origin, destination, _) in index.segments() {
                prop_assert!(index.destinations_from(origin).any(|c| c == destination));
            }
        }
    }
}
