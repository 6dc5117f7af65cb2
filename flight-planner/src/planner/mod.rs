//! Flight connectivity planner.
//!
//! This module answers two questions about a loaded catalog: which direct
//! flights serve each city pair, and which one-stop itineraries connect a
//! requested origin to a requested destination.
//!
//! The [`RouteIndex`] is built once from the catalog and keeps every leg list
//! in canonical order (see [`ordering`]). The resolver then reads feasible
//! connections straight off those sorted lists.

mod connections;
pub mod ordering;
mod query;
mod route_index;

pub use connections::{
    ConnectionCandidate, InboundConnections, TransferPoint, feasible_suffix,
    feasible_suffix_linear, resolve, resolve_linear, transfer_cities,
};
pub use query::{QueryError, RouteQuery};
pub use route_index::{RouteIndex, SegmentFlights};
