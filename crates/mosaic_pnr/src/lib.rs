//! Placed-and-routed design model.
//!
//! This crate holds the output of placement and routing as bitstream
//! generation sees it: cells with their BEL assignment and parameters
//! ([`PnrCell`]), and nets with the PIPs bound to them ([`PnrNet`]). Designs
//! are built programmatically or loaded from a JSON interchange file with
//! [`PnrDesign::from_json`].

#![warn(missing_docs)]

pub mod data;
pub mod ids;
pub mod json;
pub mod property;

pub use data::{Params, PnrCell, PnrDesign, PnrNet};
pub use ids::{PnrCellId, PnrNetId};
pub use property::Property;
