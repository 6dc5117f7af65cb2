//! Domain error types.
//!
//! These errors represent field validation failures in the domain layer.
//! They are distinct from catalog shape errors and IO errors.

use super::{InvalidAirline, InvalidCity, InvalidPrice, TimeError};

/// Domain-level errors raised while validating a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Departure or arrival time failed to parse
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Airline name was blank
    #[error(transparent)]
    Airline(#[from] InvalidAirline),

    /// Origin or destination name was blank
    #[error(transparent)]
    City(#[from] InvalidCity),

    /// Fare was not a finite, non-negative number
    #[error(transparent)]
    Price(#[from] InvalidPrice),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airline, City, ClockTime, Price};

    #[test]
    fn error_display() {
        let err: DomainError = ClockTime::parse("25:00").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");

        let err: DomainError = Airline::parse(" ").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid airline: name must not be empty");

        let err: DomainError = City::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid city: name must not be empty");

        let err: DomainError = Price::parse("x").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid price: not a decimal number");
    }

    #[test]
    fn variants_match_source() {
        let err: DomainError = Price::parse("-1").unwrap_err().into();
        assert!(matches!(err, DomainError::Price(_)));

        let err: DomainError = ClockTime::parse("1:2").unwrap_err().into();
        assert!(matches!(err, DomainError::Time(_)));
    }
}
