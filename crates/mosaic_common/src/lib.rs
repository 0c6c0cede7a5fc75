//! Shared foundational types used across the Mosaic bitstream toolchain.
//!
//! This crate provides interned identifiers for cell, net and parameter names,
//! content hashing for reproducibility checks, and the common internal-error
//! result type.

#![warn(missing_docs)]

pub mod hash;
pub mod ident;
pub mod result;

pub use hash::ContentHash;
pub use ident::{Ident, Interner};
pub use result::{InternalError, MosaicResult};
