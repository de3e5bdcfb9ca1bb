//! # fxval_product: Resolved FX Instruments
//!
//! Product layer of the fxval workspace. Provides immutable, validated
//! descriptions of tradable instruments and their cash flows:
//! - Trade direction and option style enums (`common`)
//! - Dated payments (`payment`)
//! - Resolved FX transactions and the resolved FX digital option (`fx`)
//! - Cash-flow component variants for swap-style legs (`cashflow`)
//!
//! "Resolved" means fully specified: holiday calendars and business day
//! rules have already been applied, so every date in a resolved product is
//! final. A resolved product is bound to the reference data that produced
//! it; if that data changes (a new holiday, say), the resolved form is not
//! updated, so care is needed when caching or persisting one.
//!
//! All products validate their invariants exactly once, at construction,
//! and are immutable afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cashflow;
pub mod common;
pub mod fx;
pub mod payment;

pub use cashflow::{CashFlowComponent, NotionalExchange, RatePeriod};
pub use common::{LongShort, PutCall};
pub use fx::{ResolvedFxDigitalOption, ResolvedFxDigitalOptionBuilder, ResolvedFxSingle};
pub use payment::Payment;
