//! Domain types for the flight planner.
//!
//! This module contains the core domain model types that represent
//! validated catalog data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airline;
mod city;
mod error;
mod leg;
mod price;
mod segment;
mod time;

pub use airline::{Airline, InvalidAirline};
pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use leg::FlightLeg;
pub use price::{InvalidPrice, Price};
pub use segment::Segment;
pub use time::{ClockTime, TimeError};
