//! Currency pair identifier for FX markets.
//!
//! A [`CurrencyPair`] is a pure identifier: an ordered pair of distinct
//! currencies. It deliberately carries no market level; spot and forward
//! rates belong to market data, not to the pair itself.
//!
//! # Examples
//!
//! ```
//! use fxval_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::of(Currency::EUR, Currency::USD).unwrap();
//! assert_eq!(pair.base(), Currency::EUR);
//! assert_eq!(pair.counter(), Currency::USD);
//! assert_eq!(pair.code(), "EUR/USD");
//!
//! let inverted = pair.invert();
//! assert_eq!(inverted.code(), "USD/EUR");
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered pair of distinct currencies, BASE/COUNTER.
///
/// Equality and hashing cover both currencies; EUR/USD and USD/EUR are
/// different pairs.
///
/// # Examples
///
/// ```
/// use fxval_core::types::{Currency, CurrencyPair};
///
/// let pair: CurrencyPair = "GBP/USD".parse().unwrap();
/// assert!(pair.contains(Currency::GBP));
/// assert!(!pair.contains(Currency::JPY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    /// Base currency (one unit of this currency is priced in the counter)
    base: Currency,
    /// Counter (quote) currency
    counter: Currency,
}

impl CurrencyPair {
    /// Creates a currency pair from two distinct currencies.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if both sides are the same
    /// currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::{Currency, CurrencyPair};
    ///
    /// assert!(CurrencyPair::of(Currency::EUR, Currency::USD).is_ok());
    /// assert!(CurrencyPair::of(Currency::USD, Currency::USD).is_err());
    /// ```
    pub fn of(base: Currency, counter: Currency) -> Result<Self, CurrencyError> {
        if base == counter {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, counter })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter currency.
    #[inline]
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns the pair code in standard format (BASE/COUNTER).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.counter.code())
    }

    /// Returns the pair with base and counter swapped.
    pub fn invert(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Returns true if this pair is in FX market convention order.
    ///
    /// The conventional order puts the currency with lower
    /// [`Currency::fx_precedence`] first: EUR/USD is conventional,
    /// USD/EUR is not.
    pub fn is_conventional(&self) -> bool {
        self.base.fx_precedence() < self.counter.fx_precedence()
    }

    /// Returns this pair in FX market convention order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::types::{Currency, CurrencyPair};
    ///
    /// let unconventional = CurrencyPair::of(Currency::USD, Currency::EUR).unwrap();
    /// assert_eq!(unconventional.to_conventional().code(), "EUR/USD");
    /// ```
    pub fn to_conventional(&self) -> Self {
        if self.is_conventional() {
            *self
        } else {
            self.invert()
        }
    }

    /// Checks whether this pair contains the given currency.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses a pair from "BASE/COUNTER" format (e.g. "EUR/USD").
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| CurrencyError::ParseError(format!("expected BASE/COUNTER: {}", s)))?;
        CurrencyPair::of(base.parse()?, counter.parse()?)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.code(), self.counter.code())
    }
}
