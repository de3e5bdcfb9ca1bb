//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: construction-time validation failures
//! - `DateError`: errors from date construction and parsing
//! - `CurrencyError`: errors from currency and currency pair parsing

use std::fmt;
use thiserror::Error;

use super::time::Date;

/// Construction-time validation failure.
///
/// Raised synchronously by a fallible factory or builder when a required
/// field is missing or a cross-field invariant is violated. Never raised
/// after construction: values are correct-by-construction thereafter.
///
/// # Examples
/// ```
/// use fxval_core::types::{Date, ValidationError};
///
/// let err = ValidationError::MissingField { field: "expiry" };
/// assert_eq!(format!("{}", err), "missing required field: expiry");
///
/// let err = ValidationError::DateOrder {
///     first: "expiry.date",
///     first_date: Date::from_ymd(2024, 7, 1).unwrap(),
///     second: "underlying.payment_date",
///     second_date: Date::from_ymd(2024, 6, 28).unwrap(),
/// };
/// assert!(format!("{}", err).contains("on or before"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// A required field was not supplied to a builder.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A cross-field date ordering invariant was violated.
    ///
    /// Carries both compared dates so the caller can see exactly which
    /// ordering failed.
    #[error("{first} ({first_date}) must be on or before {second} ({second_date})")]
    DateOrder {
        /// Name of the date that must come first.
        first: &'static str,
        /// Value of the date that must come first.
        first_date: Date,
        /// Name of the date that must come second.
        second: &'static str,
        /// Value of the date that must come second.
        second_date: Date,
    },

    /// Two payments that must differ in currency share the same one.
    #[error("payments must be in different currencies, both are {currency}")]
    SamePaymentCurrency {
        /// The shared currency code.
        currency: &'static str,
    },

    /// Two payments that must settle together have different dates.
    #[error("payments must settle on the same date: {0} vs {1}")]
    PaymentDateMismatch(Date, Date),

    /// Two payments that must offset each other have the same sign.
    #[error("one payment must be received and one paid")]
    SameSignPayments,
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: invalid date components (e.g. February 30th)
/// - `ParseError`: failed to parse a date string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g. February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: unknown ISO 4217 code
/// - `ParseError`: failed to parse a currency or pair string
/// - `SameCurrency`: base and counter currencies are the same
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    UnknownCurrency(String),

    /// Failed to parse currency or currency pair string.
    ParseError(String),

    /// Base and counter currencies are the same.
    SameCurrency(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
            CurrencyError::ParseError(msg) => write!(f, "Currency parse error: {}", msg),
            CurrencyError::SameCurrency(code) => {
                write!(f, "Base and counter currencies are the same: {}", code)
            }
        }
    }
}

impl std::error::Error for CurrencyError {}
