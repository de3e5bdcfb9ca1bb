//! Identifier value types: provider identifiers, field names, and feeds.

use std::borrow::Cow;
use std::fmt;

use super::error::MarketDataError;

/// An opaque identifier from an external data provider.
///
/// Formatted as "Scheme~Value", e.g. "ExampleFeed~AAPL". The scheme names
/// the identifier namespace; the value is opaque within it. Neither part
/// may be empty and the scheme may not contain '~'.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardId {
    /// The identifier scheme (namespace)
    scheme: String,
    /// The identifier value within the scheme
    value: String,
}

impl StandardId {
    /// Creates an identifier from scheme and value.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidIdentifier` if either part is
    /// empty or the scheme contains '~'.
    pub fn of(
        scheme: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, MarketDataError> {
        let scheme = scheme.into();
        let value = value.into();
        if scheme.is_empty() || value.is_empty() || scheme.contains('~') {
            return Err(MarketDataError::InvalidIdentifier(format!(
                "{}~{}",
                scheme, value
            )));
        }
        Ok(Self { scheme, value })
    }

    /// Parses an identifier from "Scheme~Value" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxval_core::market_data::StandardId;
    ///
    /// let id = StandardId::parse("ExampleFeed~EURUSD-SPOT").unwrap();
    /// assert_eq!(id.scheme(), "ExampleFeed");
    /// assert_eq!(id.value(), "EURUSD-SPOT");
    ///
    /// assert!(StandardId::parse("NoSeparator").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MarketDataError> {
        let (scheme, value) = s
            .split_once('~')
            .ok_or_else(|| MarketDataError::InvalidIdentifier(s.to_string()))?;
        Self::of(scheme, value)
    }

    /// Returns the identifier scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the identifier value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

/// A generic field tag in a market data record.
///
/// Field names are generic rather than provider-specific: the market data
/// system maps them to the underlying provider's field names, so
/// calculations stay independent of the data source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldName(Cow<'static, str>);

impl FieldName {
    /// The primary market value of the record: the last trade price of an
    /// equity, the mid rate of an FX quote, and so on.
    pub const MARKET_VALUE: FieldName = FieldName(Cow::Borrowed("MarketValue"));

    /// Creates a field name.
    pub fn of(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selector for a market data feed.
///
/// A feed is one source of observable market data, such as a vendor's
/// live service or a snapshot store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MarketDataFeed(Cow<'static, str>);

impl MarketDataFeed {
    /// Placeholder feed used when a request has not yet been assigned to
    /// a concrete data source.
    pub const NONE: MarketDataFeed = MarketDataFeed(Cow::Borrowed("None"));

    /// Creates a feed selector.
    pub fn of(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the feed name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketDataFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
