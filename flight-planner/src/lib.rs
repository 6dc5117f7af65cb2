//! Flight connectivity planner.
//!
//! Reads a flat-text flight catalog, lists the direct flights serving every
//! city pair, and answers: "which one-stop itineraries get me from this city
//! to that one?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod report;
pub mod run;
