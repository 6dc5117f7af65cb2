//! Canonical flight ordering.
//!
//! Every list of legs the planner exposes is kept in one fixed order, used
//! both for listing direct flights and for finding connections.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::FlightLeg;

/// Compare two legs in canonical order.
///
/// Legs are ordered by:
/// 1. Departure minute (earlier first)
/// 2. Duration in minutes (shorter first)
/// 3. Airline name (lexicographic)
///
/// Legs equal on all three keys compare `Equal`; callers must sort stably so
/// such ties keep their input order.
pub fn canonical_cmp(a: &FlightLeg, b: &FlightLeg) -> Ordering {
    // Primary: departure time
    let dep_cmp = a.departure_minute().cmp(&b.departure_minute());
    if dep_cmp != Ordering::Equal {
        return dep_cmp;
    }

    // Secondary: shorter flight
    let duration_cmp = a.duration_minutes().cmp(&b.duration_minutes());
    if duration_cmp != Ordering::Equal {
        return duration_cmp;
    }

    // Tertiary: airline name
    a.airline().cmp(b.airline())
}

/// Sort legs in canonical order, keeping input order among full ties.
pub fn sort_canonical(legs: &mut [Arc<FlightLeg>]) {
    // `sort_by` is stable.
    legs.sort_by(|a, b| canonical_cmp(a, b));
}

/// Stable merge of two canonically sorted lists.
///
/// On a full tie the leg from `left` comes first, so merging the sorted
/// halves of a list gives the same result as sorting the whole list.
pub fn merge_canonical(
    left: Vec<Arc<FlightLeg>>,
    right: Vec<Arc<FlightLeg>>,
) -> Vec<Arc<FlightLeg>> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => canonical_cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Whether `legs` is in canonical order.
pub fn is_canonical(legs: &[Arc<FlightLeg>]) -> bool {
    legs.windows(2)
        .all(|pair| canonical_cmp(&pair[0], &pair[1]) != Ordering::Greater)
}
