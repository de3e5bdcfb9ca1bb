//! # fxval_core: Foundation for FX Valuation
//!
//! Foundation layer of the fxval workspace, providing:
//! - Currency, currency pair, and monetary amount types (`types`)
//! - Date and day count types built on chrono (`types::time`)
//! - Validation error taxonomy (`types::error`)
//! - Holiday calendars and reference data (`reference_data`)
//! - FX indices and index observations (`index`)
//! - Market data identifiers and keys (`market_data`)
//!
//! ## Correct-by-construction principle
//!
//! Every value object in this crate validates its invariants exactly once,
//! in a fallible factory, and is immutable afterwards. Validation failures
//! surface as `ValidationError` (or a more specific error) at construction;
//! no operation on a constructed value can fail for a reason that was
//! checkable up front.
//!
//! ## Usage
//!
//! ```rust
//! use fxval_core::index::{FxIndex, FxIndexObservation};
//! use fxval_core::reference_data::ReferenceData;
//! use fxval_core::types::Date;
//!
//! let ref_data = ReferenceData::standard();
//! let index = FxIndex::eur_usd_wm();
//! let fixing = Date::from_ymd(2024, 6, 14).unwrap();
//!
//! let observation = FxIndexObservation::of(index, fixing, &ref_data).unwrap();
//! assert!(observation.maturity_date() > observation.fixing_date());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod index;
pub mod market_data;
pub mod reference_data;
pub mod types;
