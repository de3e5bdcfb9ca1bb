//! Reference data: holiday calendars and their lookup.
//!
//! Reference data is the calendar-calculation collaborator used to derive
//! settlement dates from fixing dates. A [`ReferenceData`] instance is an
//! immutable map from [`HolidayCalendarId`] to [`HolidayCalendar`], built
//! once and shared read-only.
//!
//! # Examples
//!
//! ```
//! use fxval_core::reference_data::{HolidayCalendar, HolidayCalendarId, ReferenceData};
//! use fxval_core::types::Date;
//!
//! let id = HolidayCalendarId::of("EUTA+USNY");
//! let ref_data = ReferenceData::of(vec![HolidayCalendar::weekends_only(id.clone())]);
//!
//! let calendar = ref_data.calendar(&id).unwrap();
//! let friday = Date::from_ymd(2024, 6, 14).unwrap();
//! // shifting two business days over a weekend lands on Tuesday
//! assert_eq!(calendar.shift(friday, 2), Date::from_ymd(2024, 6, 18).unwrap());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

use crate::types::Date;

/// Errors from reference data lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDataError {
    /// No calendar is registered under the requested identifier.
    #[error("holiday calendar not found: {id}")]
    CalendarNotFound {
        /// The identifier that failed to resolve.
        id: String,
    },
}

/// Identifier of a holiday calendar.
///
/// Combined calendars use a '+'-joined name by convention, e.g.
/// "EUTA+USNY" for the TARGET and New York calendars together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidayCalendarId(String);

impl HolidayCalendarId {
    /// Creates an identifier from its name.
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business day calendar: weekends plus an explicit holiday set.
///
/// Saturdays and Sundays are never business days; further holidays are
/// supplied explicitly. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayCalendar {
    /// The calendar identifier
    id: HolidayCalendarId,
    /// Dates that are holidays in addition to weekends
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar with the given holiday dates.
    pub fn of(id: HolidayCalendarId, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            id,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Creates a calendar where only weekends are non-business days.
    pub fn weekends_only(id: HolidayCalendarId) -> Self {
        Self {
            id,
            holidays: BTreeSet::new(),
        }
    }

    /// Returns the calendar identifier.
    pub fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    /// Returns true if the date is a business day.
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }

    /// Returns the first business day strictly after the given date.
    pub fn next_business_day(&self, date: Date) -> Date {
        let mut candidate = date.plus_days(1);
        while !self.is_business_day(candidate) {
            candidate = candidate.plus_days(1);
        }
        candidate
    }

    /// Shifts the date forward by the given number of business days.
    ///
    /// A shift of zero returns the date unchanged, even if it is not a
    /// business day.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::reference_data::{HolidayCalendar, HolidayCalendarId};
    /// use fxval_core::types::Date;
    ///
    /// let cal = HolidayCalendar::weekends_only(HolidayCalendarId::of("USNY"));
    /// let friday = Date::from_ymd(2024, 6, 14).unwrap();
    /// assert_eq!(cal.shift(friday, 1), Date::from_ymd(2024, 6, 17).unwrap());
    /// ```
    pub fn shift(&self, date: Date, business_days: u32) -> Date {
        let mut result = date;
        for _ in 0..business_days {
            result = self.next_business_day(result);
        }
        result
    }
}

/// Immutable holiday calendar lookup.
///
/// Built once from a set of calendars; read-only thereafter and freely
/// shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceData {
    calendars: BTreeMap<HolidayCalendarId, HolidayCalendar>,
}

impl ReferenceData {
    /// Builds reference data from a collection of calendars.
    ///
    /// If two calendars share an identifier, the later one wins.
    pub fn of(calendars: impl IntoIterator<Item = HolidayCalendar>) -> Self {
        Self {
            calendars: calendars
                .into_iter()
                .map(|cal| (cal.id().clone(), cal))
                .collect(),
        }
    }

    /// Builds reference data containing weekend-only calendars for the
    /// identifiers used by the built-in FX indices.
    ///
    /// Suitable as a default when no holiday feeds are loaded; production
    /// use should construct calendars from real holiday data via
    /// [`ReferenceData::of`].
    pub fn standard() -> Self {
        Self::of(
            ["EUTA+USNY", "GBLO+USNY", "USNY+JPTO"]
                .map(|name| HolidayCalendar::weekends_only(HolidayCalendarId::of(name))),
        )
    }

    /// Looks up a calendar by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError::CalendarNotFound` naming the identifier
    /// if no calendar is registered under it.
    pub fn calendar(&self, id: &HolidayCalendarId) -> Result<&HolidayCalendar, ReferenceDataError> {
        self.calendars
            .get(id)
            .ok_or_else(|| ReferenceDataError::CalendarNotFound {
                id: id.name().to_string(),
            })
    }
}
