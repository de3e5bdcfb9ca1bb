//! Resolved FX transactions and options.
//!
//! - [`ResolvedFxSingle`]: a single FX exchange of two payments
//! - [`ResolvedFxDigitalOption`]: a digital option on such an exchange

mod digital_option;
mod single;

pub use digital_option::{ResolvedFxDigitalOption, ResolvedFxDigitalOptionBuilder};
pub use single::ResolvedFxSingle;
