//! Core currency, monetary, and time types.
//!
//! This module provides:
//! - `currency`: ISO 4217 currency codes with metadata
//! - `currency_pair`: conventional FX currency pairs
//! - `money`: signed currency amounts
//! - `time`: date wrapper and day count conventions
//! - `error`: structured error types for validation, date, and currency failures
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Currency`] from `currency`
//! - [`CurrencyPair`] from `currency_pair`
//! - [`CurrencyAmount`] from `money`
//! - [`Date`], [`DayCount`] from `time`
//! - [`ValidationError`], [`DateError`], [`CurrencyError`] from `error`

pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod money;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, DateError, ValidationError};
pub use money::CurrencyAmount;
pub use time::{Date, DayCount};
