//! Quote keys and resolved quote identifiers.

use std::fmt;

use super::id::{FieldName, MarketDataFeed, StandardId};

/// Market data key identifying a field of an external identifier.
///
/// A quote key names a piece of data in an external provider without
/// committing to a feed: the same key can be resolved against live data,
/// a snapshot, or a test fixture. Pairing the key with a feed via
/// [`QuoteKey::to_observable_id`] yields the concrete [`QuoteId`] the
/// market data system looks up.
///
/// Equality and hashing cover both fields.
///
/// # Examples
///
/// ```
/// use fxval_core::market_data::{FieldName, QuoteKey, StandardId};
///
/// let id = StandardId::parse("ExampleFeed~GBPUSD-SPOT").unwrap();
///
/// // Defaults to the market value field
/// let key = QuoteKey::of(id.clone());
/// assert_eq!(key.field_name(), &FieldName::MARKET_VALUE);
///
/// // Or request a specific field
/// let close = QuoteKey::of_field(id, FieldName::of("ClosingPrice"));
/// assert_ne!(key, close);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteKey {
    /// The identifier of the market data in the external provider
    standard_id: StandardId,
    /// The generic field tag to read from the record
    field_name: FieldName,
}

impl QuoteKey {
    /// Creates a key for the market value of an identifier.
    ///
    /// Requests the [`FieldName::MARKET_VALUE`] field.
    pub fn of(standard_id: StandardId) -> Self {
        Self {
            standard_id,
            field_name: FieldName::MARKET_VALUE,
        }
    }

    /// Creates a key for a specific field of an identifier.
    pub fn of_field(standard_id: StandardId, field_name: FieldName) -> Self {
        Self {
            standard_id,
            field_name,
        }
    }

    /// Returns the external provider identifier.
    pub fn standard_id(&self) -> &StandardId {
        &self.standard_id
    }

    /// Returns the field tag.
    pub fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    /// Resolves this key against a feed into a concrete observable
    /// identifier.
    ///
    /// Pure projection: no lookup happens here.
    pub fn to_observable_id(&self, feed: MarketDataFeed) -> QuoteId {
        QuoteId {
            standard_id: self.standard_id.clone(),
            feed,
            field_name: self.field_name.clone(),
        }
    }
}

impl fmt::Display for QuoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.standard_id, self.field_name)
    }
}

/// A fully-resolved observable identifier: provider id, feed, and field.
///
/// This is what the market data system can actually fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteId {
    /// The identifier of the market data in the external provider
    standard_id: StandardId,
    /// The feed supplying the data
    feed: MarketDataFeed,
    /// The generic field tag to read from the record
    field_name: FieldName,
}

impl QuoteId {
    /// Creates a fully-resolved quote identifier.
    pub fn of(standard_id: StandardId, feed: MarketDataFeed, field_name: FieldName) -> Self {
        Self {
            standard_id,
            feed,
            field_name,
        }
    }

    /// Returns the external provider identifier.
    pub fn standard_id(&self) -> &StandardId {
        &self.standard_id
    }

    /// Returns the feed.
    pub fn feed(&self) -> &MarketDataFeed {
        &self.feed
    }

    /// Returns the field tag.
    pub fn field_name(&self) -> &FieldName {
        &self.field_name
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}/{}", self.standard_id, self.feed, self.field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> StandardId {
        StandardId::parse("ExampleFeed~EURUSD-SPOT").unwrap()
    }

    #[test]
    fn test_of_defaults_to_market_value() {
        let key = QuoteKey::of(id());
        assert_eq!(key.standard_id(), &id());
        assert_eq!(key.field_name(), &FieldName::MARKET_VALUE);
    }

    #[test]
    fn test_of_field() {
        let key = QuoteKey::of_field(id(), FieldName::of("ClosingPrice"));
        assert_eq!(key.field_name().name(), "ClosingPrice");
    }

    #[test]
    fn test_to_observable_id_carries_all_parts() {
        let key = QuoteKey::of_field(id(), FieldName::of("ClosingPrice"));
        let observable = key.to_observable_id(MarketDataFeed::of("LIVE"));
        assert_eq!(observable.standard_id(), &id());
        assert_eq!(observable.feed().name(), "LIVE");
        assert_eq!(observable.field_name().name(), "ClosingPrice");
        assert_eq!(
            observable,
            QuoteId::of(id(), MarketDataFeed::of("LIVE"), FieldName::of("ClosingPrice"))
        );
    }

    #[test]
    fn test_resolution_is_pure() {
        let key = QuoteKey::of(id());
        let a = key.to_observable_id(MarketDataFeed::NONE);
        let b = key.to_observable_id(MarketDataFeed::NONE);
        assert_eq!(a, b);
        // the key is unchanged by resolution
        assert_eq!(key, QuoteKey::of(id()));
    }

    #[test]
    fn test_equality_covers_both_fields() {
        let a = QuoteKey::of(id());
        let b = QuoteKey::of_field(id(), FieldName::MARKET_VALUE);
        let c = QuoteKey::of_field(id(), FieldName::of("ClosingPrice"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let key = QuoteKey::of(id());
        assert_eq!(format!("{}", key), "ExampleFeed~EURUSD-SPOT/MarketValue");
        let observable = key.to_observable_id(MarketDataFeed::of("LIVE"));
        assert_eq!(
            format!("{}", observable),
            "ExampleFeed~EURUSD-SPOT@LIVE/MarketValue"
        );
    }
}
