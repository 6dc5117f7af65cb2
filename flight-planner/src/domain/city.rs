//! City name type.

use std::fmt;

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A city served by at least one leg in the catalog.
///
/// City names are free text: they may contain spaces and non-ASCII letters.
/// Surrounding whitespace is trimmed; the result must be non-empty. Cities
/// compare by code point, which fixes the order of segments and transfer
/// points in reports.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::City;
///
/// let bg = City::parse("Beograd").unwrap();
/// assert_eq!(bg.as_str(), "Beograd");
///
/// let ny = City::parse(" New York ").unwrap();
/// assert_eq!(ny.as_str(), "New York");
///
/// assert!(City::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct City(String);

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let name = s.trim();

        if name.is_empty() {
            return Err(InvalidCity {
                reason: "name must not be empty",
            });
        }

        Ok(City(name.to_string()))
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(City::parse("X").is_ok());
        assert!(City::parse("Novi Sad").is_ok());
        assert!(City::parse("São Paulo").is_ok());
        assert!(City::parse("Niš").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(City::parse("  Paris\t").unwrap().as_str(), "Paris");
    }

    #[test]
    fn reject_blank() {
        assert!(City::parse("").is_err());
        assert!(City::parse("   ").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let amsterdam = City::parse("Amsterdam").unwrap();
        let berlin = City::parse("Berlin").unwrap();
        let b = City::parse("B").unwrap();

        assert!(amsterdam < berlin);
        // Prefix sorts first
        assert!(b < berlin);
    }

    #[test]
    fn display_and_debug() {
        let city = City::parse("Rome").unwrap();
        assert_eq!(format!("{}", city), "Rome");
        assert_eq!(format!("{:?}", city), "City(Rome)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(City::parse("Oslo").unwrap());
        assert!(set.contains(&City::parse(" Oslo").unwrap()));
        assert!(!set.contains(&City::parse("Bergen").unwrap()));
    }
}
