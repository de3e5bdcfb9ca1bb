//! Enums shared across product types.

use std::fmt;
use std::str::FromStr;

/// Whether a position is long or short.
///
/// At expiry, the long party holds the option to enter the transaction;
/// the short party stands ready to take the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LongShort {
    /// Long position (holds the option)
    Long,
    /// Short position (has written the option)
    Short,
}

impl LongShort {
    /// Returns whether this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, LongShort::Long)
    }

    /// Returns whether this is a short position.
    #[inline]
    pub fn is_short(&self) -> bool {
        matches!(self, LongShort::Short)
    }

    /// Returns the sign of the position: +1.0 for long, -1.0 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            LongShort::Long => 1.0,
            LongShort::Short => -1.0,
        }
    }

    /// Returns the opposite position.
    #[inline]
    pub fn opposite(&self) -> LongShort {
        match self {
            LongShort::Long => LongShort::Short,
            LongShort::Short => LongShort::Long,
        }
    }
}

impl fmt::Display for LongShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongShort::Long => write!(f, "Long"),
            LongShort::Short => write!(f, "Short"),
        }
    }
}

impl FromStr for LongShort {
    type Err = String;

    /// Parses from "Long"/"Short" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(LongShort::Long),
            "short" => Ok(LongShort::Short),
            _ => Err(format!("Unknown long/short value: {}", s)),
        }
    }
}

/// Whether an option is a put or a call.
///
/// For an FX option this refers to the base currency: a call is the right
/// to buy the base currency, a put the right to sell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PutCall {
    /// Right to buy the underlying (base currency)
    Call,
    /// Right to sell the underlying (base currency)
    Put,
}

impl PutCall {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PutCall::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PutCall::Put)
    }
}

impl fmt::Display for PutCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutCall::Call => write!(f, "Call"),
            PutCall::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for PutCall {
    type Err = String;

    /// Parses from "Put"/"Call" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(PutCall::Call),
            "put" => Ok(PutCall::Put),
            _ => Err(format!("Unknown put/call value: {}", s)),
        }
    }
}
