//! Wall-clock time handling for catalog legs.
//!
//! The catalog gives times as "HH:MM" strings within one implicit day. This
//! module parses them into a minute-of-day for comparisons while keeping the
//! source text, so reports echo times exactly as they were written.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day as written in the flight catalog.
///
/// Equality compares the source text as well as the time, so `8:05` and
/// `08:05` are distinct values with the same [`minute_of_day`](Self::minute_of_day).
/// Ordering is deliberately not implemented; compare minutes instead.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::ClockTime;
///
/// let time = ClockTime::parse("14:30").unwrap();
/// assert_eq!(time.minute_of_day(), 870);
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClockTime {
    time: NaiveTime,
    text: String,
}

impl ClockTime {
    /// Parse a time from "HH:MM" (or "H:MM") format.
    ///
    /// The hour takes one or two digits, the minute exactly two.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    /// assert!(ClockTime::parse("8:05").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("14:3").is_err());
    /// assert!(ClockTime::parse("24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hour_str, minute_str) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        if hour_str.is_empty() || hour_str.len() > 2 {
            return Err(TimeError::new("hour must be one or two digits"));
        }
        if minute_str.len() != 2 {
            return Err(TimeError::new("minute must be two digits"));
        }

        let hour = parse_digits(hour_str.as_bytes())
            .ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_digits(minute_str.as_bytes())
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self {
            time,
            text: s.to_string(),
        })
    }

    /// Minutes since midnight (0-1439).
    pub fn minute_of_day(&self) -> u16 {
        // At most 1439, always fits.
        (self.time.num_seconds_from_midnight() / 60) as u16
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// The time exactly as written in the catalog.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({})", self.text)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse one or two ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 2 {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}
