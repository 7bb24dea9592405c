//! Calendar date argument type.

use crate::error::{GarminError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format accepted on the command line and sent to Garmin Connect.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe wrapper for a `YYYY-MM-DD` calendar date.
///
/// # Examples
///
/// ```rust
/// use garmin_stats::CalendarDate;
///
/// let date: CalendarDate = "2024-08-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-08-01");
/// assert!("2024-13-40".parse::<CalendarDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(pub NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = GarminError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GarminError::InvalidDate {
            input: s.to_string(),
        };

        // chrono also takes signed and short years; only plain YYYY-MM-DD is allowed
        let b = s.as_bytes();
        let well_formed = b.len() == 10
            && b.iter().enumerate().all(|(i, c)| match i {
                4 | 7 => *c == b'-',
                _ => c.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}
