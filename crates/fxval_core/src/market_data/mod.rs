//! Market data identifiers and keys.
//!
//! This module provides the vocabulary for naming externally-provided
//! market data:
//!
//! - [`StandardId`]: an opaque provider identifier ("Scheme~Value")
//! - [`FieldName`]: a generic field tag, mapped to provider-specific
//!   field names by the market data system
//! - [`MarketDataFeed`]: a feed selector
//! - [`QuoteKey`]: a request for a field of an identifier, independent of
//!   any feed
//! - [`QuoteId`]: a fully-resolved observable identifier (key + feed)
//!
//! A calculation holds a [`QuoteKey`]; resolving it against a feed yields
//! the [`QuoteId`] the market data system can actually look up. Keeping
//! field names generic means the market data source can change without
//! affecting calculation code.
//!
//! # Example
//!
//! ```
//! use fxval_core::market_data::{FieldName, MarketDataFeed, QuoteKey, StandardId};
//!
//! let id = StandardId::parse("ExampleFeed~EURUSD-1W-VOL").unwrap();
//! let key = QuoteKey::of(id);
//! assert_eq!(key.field_name(), &FieldName::MARKET_VALUE);
//!
//! let observable = key.to_observable_id(MarketDataFeed::of("LIVE"));
//! assert_eq!(observable.feed().name(), "LIVE");
//! ```

mod error;
mod id;
mod quote;

pub use error::MarketDataError;
pub use id::{FieldName, MarketDataFeed, StandardId};
pub use quote::{QuoteId, QuoteKey};
