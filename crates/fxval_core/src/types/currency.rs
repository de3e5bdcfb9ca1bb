//! Currency types for financial calculations.
//!
//! This module provides ISO 4217 currency codes with metadata for
//! decimal precision and FX market convention ordering.
//!
//! # Examples
//!
//! ```
//! use fxval_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.decimal_places(), 0);  // Yen has no minor units
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes with decimal precision metadata.
///
/// Covers the major FX trading currencies. The enum is `#[non_exhaustive]`
/// so further currencies can be added without breaking downstream matches.
///
/// # Examples
///
/// ```
/// use fxval_core::types::currency::Currency;
///
/// assert_eq!(Currency::EUR.code(), "EUR");
///
/// // Parse from string (case-insensitive)
/// let gbp: Currency = "gbp".parse().unwrap();
/// assert_eq!(gbp, Currency::GBP);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar (2 decimal places)
    USD,

    /// Euro (2 decimal places)
    EUR,

    /// British Pound Sterling (2 decimal places)
    GBP,

    /// Japanese Yen (0 decimal places)
    JPY,

    /// Swiss Franc (2 decimal places)
    CHF,

    /// Australian Dollar (2 decimal places)
    AUD,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::CHF.code(), "CHF");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::EUR.decimal_places(), 2);
    /// assert_eq!(Currency::JPY.decimal_places(), 0);
    /// ```
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the FX market convention precedence for this currency.
    ///
    /// A lower value means the currency is conventionally quoted as the
    /// base of a pair: EUR/USD, GBP/USD, USD/JPY (never USD/EUR). Used to
    /// order the two sides of an FX exchange deterministically.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::currency::Currency;
    ///
    /// assert!(Currency::EUR.fx_precedence() < Currency::USD.fx_precedence());
    /// assert!(Currency::USD.fx_precedence() < Currency::JPY.fx_precedence());
    /// ```
    pub fn fx_precedence(&self) -> u8 {
        match self {
            Currency::EUR => 1,
            Currency::GBP => 2,
            Currency::AUD => 3,
            Currency::USD => 4,
            Currency::CHF => 5,
            Currency::JPY => 6,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "AUD" => Ok(Currency::AUD),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
