//! Fare type.

use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// The listed fare of a leg.
///
/// Any finite, non-negative decimal is accepted on input, at any precision.
/// `Display` always renders exactly two fractional digits.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Price;
///
/// assert_eq!(Price::parse("100").unwrap().to_string(), "100.00");
/// assert_eq!(Price::parse("49.999").unwrap().to_string(), "50.00");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("free").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Create a price from a raw amount.
    pub fn new(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() {
            return Err(InvalidPrice {
                reason: "must be a finite number",
            });
        }
        if amount < 0.0 {
            return Err(InvalidPrice {
                reason: "must not be negative",
            });
        }

        // Collapse -0.0 so it never renders as "-0.00"
        Ok(Price(if amount == 0.0 { 0.0 } else { amount }))
    }

    /// Parse a decimal price, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidPrice> {
        let amount: f64 = s.trim().parse().map_err(|_| InvalidPrice {
            reason: "not a decimal number",
        })?;
        Self::new(amount)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
