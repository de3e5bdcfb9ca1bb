//! Market data identifier errors.

use thiserror::Error;

/// Errors from market data identifier construction and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// An identifier string did not match the expected format.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}
