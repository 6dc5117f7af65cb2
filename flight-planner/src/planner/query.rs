//! One-stop route query.

use std::fmt;

use crate::catalog::ROUTE_SEPARATOR;
use crate::domain::{City, InvalidCity};

/// Error from parsing a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The query was not of the form `ORIGIN->DESTINATION`
    #[error("query must have the form ORIGIN->DESTINATION")]
    Shape,

    /// Origin or destination was blank
    #[error(transparent)]
    City(#[from] InvalidCity),
}

/// Request for one-stop connections between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Where the trip starts.
    origin: City,

    /// Where the trip ends.
    destination: City,
}

impl RouteQuery {
    /// Create a new query.
    pub fn new(origin: City, destination: City) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Parse `ORIGIN->DESTINATION`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::planner::RouteQuery;
    ///
    /// let query = RouteQuery::parse("Beograd -> Pariz").unwrap();
    /// assert_eq!(query.origin().as_str(), "Beograd");
    /// assert_eq!(query.destination().as_str(), "Pariz");
    ///
    /// assert!(RouteQuery::parse("Beograd").is_err());
    /// assert!(RouteQuery::parse("->Pariz").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        let cities: Vec<&str> = s.split(ROUTE_SEPARATOR).collect();
        let [origin, destination] = cities.as_slice() else {
            return Err(QueryError::Shape);
        };

        Ok(Self::new(City::parse(origin)?, City::parse(destination)?))
    }

    /// Parse a raw input line, where a blank line means "no query".
    pub fn parse_line(line: &str) -> Result<Option<Self>, QueryError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        Self::parse(line).map(Some)
    }

    /// Returns the origin city.
    pub fn origin(&self) -> &City {
        &self.origin
    }

    /// Returns the destination city.
    pub fn destination(&self) -> &City {
        &self.destination
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.origin, ROUTE_SEPARATOR, self.destination)
    }
}
