//! # usaddress-rs
//!
//! Best-effort parsing of free-form United States postal address strings
//! into structured components, and the reverse: rendering a parsed address
//! back to canonical string form.
//!
//! The parser is a single-pass token classifier driven by positional
//! heuristics, static USPS-style lookup tables, and a fixed priority order
//! of mutually exclusive rules. It never fails on malformed input — fields
//! it cannot recognize are simply left empty, because real-world addresses
//! are too irregular for a hard validation boundary to be useful.
//!
//! ## Features
//!
//! - **Address parsing**: house number, direction, street name/type, unit,
//!   city, state, zip — including PO Boxes, multi-word cities, numbered
//!   street names, and zip+4 handling
//! - **Address rendering**: canonical string form with state-aware
//!   direction placement, plus a street-only variant
//! - **Extraction**: best-effort recovery of an address substring embedded
//!   in a longer block of text
//! - **Classifiers**: the individual token predicates (`is_zipcode`,
//!   `is_state`, ...) are independently usable
//! - **Thread safe**: every operation is a pure function over its input
//!   plus immutable process-wide tables
//!
//! ## Quick start
//!
//! ```rust
//! let addr = usaddress_rs::parse("123 N Center St Lehi, UT 84043");
//!
//! assert_eq!(addr.house_number.as_deref(), Some("123"));
//! assert_eq!(addr.street_name.as_deref(), Some("CENTER"));
//! assert_eq!(addr.city.as_deref(), Some("LEHI"));
//! assert_eq!(addr.render(), "123 N CENTER ST LEHI, UT 84043");
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod classify;
pub mod error;
pub mod extract;
pub mod parser;
mod normalize;
mod render;
mod tables;

// Re-export main API
pub use classify::{
    is_apartment, is_po_box, is_state, is_street_direction, is_street_type, is_zipcode,
    state_abbreviation, street_type_abbreviation, street_type_expansion,
};
pub use error::{Error, Result};
pub use extract::extract;
pub use normalize::scrub_unit;
pub use parser::{parse, AddressParser, ParsedAddress};
pub use tables::{unit_term, UnitTerm};
