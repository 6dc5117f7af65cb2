//! Flight catalog loading.
//!
//! Decodes the flat-text catalog into [`FlightLeg`](crate::domain::FlightLeg)
//! values. Malformed input fails the whole load; nothing downstream ever
//! re-validates field shape.

mod error;
mod parser;

pub use error::{CatalogError, RecordError};
pub use parser::{load_catalog, parse_catalog, parse_record};

pub(crate) use parser::ROUTE_SEPARATOR;
