// SPDX-License-Identifier: MIT
//! Per-axis scale factors between two sizes.

use std::fmt;

use num::Zero;

use crate::error::ScaleError;
use crate::Rational;

/// Horizontal and vertical scale ratios, each an exact fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScaleFactor {
    pub x: Rational,
    pub y: Rational,
}

impl ScaleFactor {
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// The larger of the two axis factors.
    pub fn max(&self) -> Rational {
        self.x.max(self.y)
    }

    /// Component-wise reciprocal.
    ///
    /// # Errors
    /// [`ScaleError::ZeroFactor`] if either axis is zero,
    /// [`ScaleError::FactorOverflow`] if an axis has an `i64::MIN` numerator.
    pub fn recip(&self) -> Result<ScaleFactor, ScaleError> {
        if self.x.is_zero() || self.y.is_zero() {
            return Err(self.zero_factor());
        }
        if !negatable(self.x) || !negatable(self.y) {
            return Err(ScaleError::FactorOverflow { factor: *self });
        }
        Ok(ScaleFactor {
            x: self.x.recip(),
            y: self.y.recip(),
        })
    }

    /// `1 / max()`: the magnitude of the strongest axis, inverted.
    pub fn max_recip(&self) -> Result<Rational, ScaleError> {
        let max = self.max();
        if max.is_zero() {
            return Err(self.zero_factor());
        }
        if !negatable(max) {
            return Err(ScaleError::FactorOverflow { factor: *self });
        }
        Ok(max.recip())
    }

    /// True if either axis enlarges.
    pub fn is_upscale(&self) -> bool {
        self.max() > Rational::from_integer(1)
    }

    /// True if either axis enlarges by strictly more than `limit`.
    pub fn exceeds(&self, limit: Rational) -> bool {
        self.max() > limit
    }

    fn zero_factor(&self) -> ScaleError {
        ScaleError::ZeroFactor { factor: *self }
    }
}

// recip() negates the old numerator when it is negative.
fn negatable(r: Rational) -> bool {
    r.numer().checked_neg().is_some()
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn reversed_direction_is_reciprocal() {
        let pairs = [
            (Size::new(1920, 1080), Size::new(1280, 720)),
            (Size::new(640, 480), Size::new(1600, 1200)),
            (Size::new(4056, 3040), Size::new(333, 17)),
        ];
        for (a, b) in pairs {
            let forward = a.scale_factor_to(b).unwrap();
            let backward = b.scale_factor_to(a).unwrap();
            assert_eq!(forward, backward.recip().unwrap(), "{a} -> {b}");
        }
    }

    #[test]
    fn max_picks_larger_axis() {
        let f = ScaleFactor::new(r(5, 2), r(2, 1));
        assert_eq!(f.max(), r(5, 2));
        assert_eq!(f.max_recip().unwrap(), r(2, 5));
    }

    #[test]
    fn upscale_and_limit_are_strict() {
        assert!(!ScaleFactor::new(r(1, 1), r(1, 2)).is_upscale());
        assert!(ScaleFactor::new(r(1, 2), r(3, 2)).is_upscale());

        let limit = Rational::from_integer(2);
        assert!(!ScaleFactor::new(r(2, 1), r(2, 1)).exceeds(limit));
        assert!(ScaleFactor::new(r(2001, 1000), r(1, 1)).exceeds(limit));
    }

    #[test]
    fn zero_axis_has_no_reciprocal() {
        let f = ScaleFactor::new(r(0, 1), r(3, 2));
        assert!(f.recip().is_err());
        assert_eq!(f.max_recip().unwrap(), r(2, 3));
        assert!(ScaleFactor::new(r(0, 1), r(0, 1)).max_recip().is_err());
    }

    #[test]
    fn min_numerator_has_no_reciprocal() {
        let f = ScaleFactor::new(Rational::from_integer(i64::MIN), r(1, 1));
        assert_eq!(f.recip(), Err(ScaleError::FactorOverflow { factor: f }));

        let f = ScaleFactor::new(r(1, 1), r(i64::MIN, 3));
        assert!(f.recip().is_err());
        // max is 1, which inverts fine
        assert_eq!(f.max_recip(), Ok(r(1, 1)));

        let f = ScaleFactor::new(Rational::from_integer(i64::MIN), r(-1, 1));
        assert_eq!(f.max_recip(), Ok(r(-1, 1)));
    }

    #[test]
    fn display_uses_reduced_fractions() {
        assert_eq!(ScaleFactor::new(r(4, 2), r(3, 2)).to_string(), "(2, 3/2)");
    }
}
