//! Time types and day count conventions.
//!
//! This module provides:
//! - `Date`: type-safe date wrapper around chrono::NaiveDate
//! - `DayCount`: day count conventions for accrual year fractions
//!
//! # Examples
//!
//! ```
//! use fxval_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 182.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and the date arithmetic the
/// valuation model needs.
///
/// # Examples
///
/// ```
/// use fxval_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(date - start, 166);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidDate` for impossible dates such as
    /// February 30th.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());  // leap year
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date shifted by the given number of calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.plus_days(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(date.plus_days(-28), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn plus_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates; negative if `self`
    /// is before `other`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention for accrual year fractions.
///
/// # Variants
/// - `Act365Fixed`: actual days / 365 (derivatives standard)
/// - `Act360`: actual days / 360 (money market standard)
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCount {
    /// Actual/365 Fixed: actual_days / 365.0
    Act365Fixed,

    /// Actual/360: actual_days / 360.0
    Act360,
}

impl DayCount {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act365Fixed => "Act/365F",
            DayCount::Act360 => "Act/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `start` is after `end`; the sign carries direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::time::{Date, DayCount};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCount::Act360.year_fraction(start, end);
    /// assert!((yf - 182.0 / 360.0).abs() < 1e-12);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = end - start;
        match self {
            DayCount::Act365Fixed => days as f64 / 365.0,
            DayCount::Act360 => days as f64 / 360.0,
        }
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a day count convention from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACT365F" | "ACTUAL365" => Ok(DayCount::Act365Fixed),
            "ACT360" | "ACTUAL360" => Ok(DayCount::Act360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}
