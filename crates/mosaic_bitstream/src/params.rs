//! Typed access to cell parameters with per-parameter defaults.

use crate::bits::{int_to_bits_checked, str_to_bits};
use crate::error::BitstreamResult;
use mosaic_pnr::{Params, PnrDesign, Property};

/// A type a [`Property`] can be read as.
pub trait FromProperty: Sized {
    /// Converts the stored value.
    fn from_property(value: &Property) -> BitstreamResult<Self>;
}

/// Strings pass through; integers are stringified.
impl FromProperty for String {
    fn from_property(value: &Property) -> BitstreamResult<Self> {
        Ok(value.to_string())
    }
}

/// A `WIDTH`-bit word, least-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<const WIDTH: usize>(pub Vec<bool>);

impl<const WIDTH: usize> Word<WIDTH> {
    /// The all-zero word.
    pub fn zero() -> Self {
        Word(vec![false; WIDTH])
    }
}

/// An integer or a `0b` literal. Either form must fit in `WIDTH` bits.
impl<const WIDTH: usize> FromProperty for Word<WIDTH> {
    fn from_property(value: &Property) -> BitstreamResult<Self> {
        let bits = match value {
            Property::Int(v) => int_to_bits_checked(*v, WIDTH)?,
            Property::Str(s) => str_to_bits(s, WIDTH)?,
        };
        Ok(Word(bits))
    }
}

/// Reads `key` from `params`, or returns `default` if it is absent.
pub fn get<T: FromProperty>(
    design: &PnrDesign,
    params: &Params,
    key: &str,
    default: T,
) -> BitstreamResult<T> {
    let value = design.interner().get(key).and_then(|id| params.get(&id));
    match value {
        Some(value) => T::from_property(value),
        None => Ok(default),
    }
}

/// Reads a string-valued setting.
pub fn str_or(design: &PnrDesign, params: &Params, key: &str, default: &str) -> BitstreamResult<String> {
    get(design, params, key, default.to_string())
}
