// SPDX-License-Identifier: MIT
//! Errors raised while parsing sizes and deriving ratios from them.

use std::num::ParseIntError;

use crate::factor::ScaleFactor;
use crate::size::Size;

/// A `WxH` string could not be turned into a [`Size`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    /// The string does not split into exactly two parts on `x`.
    #[error("`{input}` is not of the form WxH")]
    Separator { input: String },
    /// One side of the `x` is not an integer.
    #[error("`{part}` in `{input}` is not an integer")]
    Component {
        input: String,
        part: String,
        #[source]
        source: ParseIntError,
    },
}

/// A ratio could not be formed because it would divide by zero or overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    #[error("division by zero: {size} has a zero dimension")]
    ZeroDimension { size: Size },
    #[error("division by zero: scale factor {factor} has no reciprocal")]
    ZeroFactor { factor: ScaleFactor },
    #[error("arithmetic on {size} overflows")]
    Overflow { size: Size },
    #[error("scale factor {factor} cannot be inverted without overflow")]
    FactorOverflow { factor: ScaleFactor },
}
