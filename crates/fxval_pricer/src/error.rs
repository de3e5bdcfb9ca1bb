//! Pricing errors.

use thiserror::Error;

/// Errors arising while pricing a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PricerError {
    /// The dispatcher holds no pricer function for the component variant.
    ///
    /// A routing miss is a configuration error and is always surfaced;
    /// it is never recovered from or retried.
    #[error("no pricer function registered for cash-flow component variant {variant}")]
    UnsupportedComponent {
        /// The name of the unrecognised variant
        variant: &'static str,
    },

    /// The pricing environment could not supply a required value.
    #[error("missing market data: {description}")]
    MissingMarketData {
        /// What was requested and could not be supplied
        description: String,
    },
}
