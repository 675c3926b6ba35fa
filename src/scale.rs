//! The 3/8 scale-down transform applied to source frames

use crate::constants::{SCALE_DENOMINATOR, SCALE_NUMERATOR};
use serde::Deserialize;

/// How the scaled dimension is rounded.
///
/// `Truncate` is what the asset pipeline has always produced: the ceiling was
/// applied after integer division, so it never rounded anything up. `Ceil`
/// rounds the real-valued quotient up and is only used when a config asks for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleRounding {
    #[default]
    Truncate,
    Ceil,
}

/// Scale one dimension by 3/8.
pub fn scale_dimension(d: u32, rounding: ScaleRounding) -> u32 {
    let product = u64::from(d) * u64::from(SCALE_NUMERATOR);
    let denom = u64::from(SCALE_DENOMINATOR);
    let scaled = match rounding {
        ScaleRounding::Truncate => product / denom,
        ScaleRounding::Ceil => product.div_ceil(denom),
    };
    scaled as u32
}

/// Scale a `(width, height)` pair independently.
pub fn scale_size(w: u32, h: u32, rounding: ScaleRounding) -> (u32, u32) {
    (scale_dimension(w, rounding), scale_dimension(h, rounding))
}
