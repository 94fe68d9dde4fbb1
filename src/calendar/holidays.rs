// ============================================================================
// Holiday Calendar
// Set of bank holidays keyed by calendar date
// ============================================================================

use crate::errors::{UtilityError, UtilityResult};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format of the compact holiday strings used in ACH batch headers (`160704`)
pub const COMPACT_DATE_FORMAT: &str = "%y%m%d";

/// ISO-8601 calendar date (`2016-07-04`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Bank holidays on which no settlement happens.
///
/// Dates are stored without time-of-day, so lookups from timestamps are
/// normalized to their UTC calendar date first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calendar from a list of dates
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Parse holiday strings with a chrono format string.
    ///
    /// # Example
    /// ```
    /// use ach_utility::calendar::{HolidayCalendar, COMPACT_DATE_FORMAT};
    ///
    /// let holidays = HolidayCalendar::parse_dates(["160704", "160904"], COMPACT_DATE_FORMAT)?;
    /// assert_eq!(holidays.len(), 2);
    /// # Ok::<(), ach_utility::UtilityError>(())
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidDate` for the first entry that does not match `format`.
    pub fn parse_dates<I, S>(dates: I, format: &str) -> UtilityResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        dates
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                NaiveDate::parse_from_str(s.trim(), format)
                    .map_err(|_| UtilityError::InvalidDate(s.to_string()))
            })
            .collect::<UtilityResult<HashSet<_>>>()
            .map(|dates| Self { dates })
    }

    /// Builder method: add a holiday
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.dates.insert(date);
        self
    }

    /// Add a holiday. Returns false if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Check whether `date` is a holiday
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Check whether the UTC calendar date of `timestamp` is a holiday
    #[inline]
    pub fn contains_timestamp(&self, timestamp: DateTime<Utc>) -> bool {
        self.contains(timestamp.date_naive())
    }

    /// Number of distinct holidays
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check whether the calendar has no holidays
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over the holidays in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

impl Extend<NaiveDate> for HolidayCalendar {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

// ============================================================================
// JSON configuration
// ============================================================================

#[cfg(feature = "serde")]
impl HolidayCalendar {
    /// Load a calendar from a JSON array of ISO dates (`["2016-07-04", ...]`).
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the document is not such an array.
    pub fn from_json(json: &str) -> UtilityResult<Self> {
        serde_json::from_str(json).map_err(|e| UtilityError::InvalidConfig(e.to_string()))
    }

    /// Serialize the calendar as a sorted JSON array of ISO dates
    pub fn to_json(&self) -> UtilityResult<String> {
        let mut dates: Vec<_> = self.dates.iter().collect();
        dates.sort();
        serde_json::to_string(&dates).map_err(|e| UtilityError::InvalidConfig(e.to_string()))
    }
}
