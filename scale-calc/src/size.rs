// SPDX-License-Identifier: MIT
//! # Frame Sizes
//!
//! [`Size`] is a width/height pair in pixels. The only way to build one from text
//! is [`FromStr`], which accepts the `WxH` notation used by media tooling
//! (`1920x1080`, `640x480`).
//!
//! ## Parsing Rules
//!
//! - The string is split on the lowercase literal `x`; exactly two parts are required.
//! - Each part is parsed as a signed integer after trimming ASCII whitespace.
//! - No range checks happen here. A zero dimension is accepted and only fails
//!   once a ratio is divided by it (see [`Size::scale_factor_to`]).
//! - Negative values parse and produce negative ratios. `i64::MIN` parses too,
//!   but any ratio built from it is rejected as an overflow since it has no
//!   positive counterpart.

use std::fmt;
use std::str::FromStr;

use crate::error::{ScaleError, SizeError};
use crate::factor::ScaleFactor;
use crate::Rational;

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i64,
    pub h: i64,
}

impl Size {
    pub const fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }

    /// Exact `w/h`.
    ///
    /// # Errors
    /// [`ScaleError::ZeroDimension`] when the height is zero.
    pub fn aspect_ratio(&self) -> Result<Rational, ScaleError> {
        if self.h == 0 {
            return Err(ScaleError::ZeroDimension { size: *self });
        }
        self.check_negatable()?;
        Ok(Rational::new(self.w, self.h))
    }

    /// Total pixel count, `w*h`.
    pub fn pixel_count(&self) -> Result<i64, ScaleError> {
        self.w
            .checked_mul(self.h)
            .ok_or(ScaleError::Overflow { size: *self })
    }

    /// Per-axis factor that maps this size onto `other`: `(other.w/w, other.h/h)`.
    ///
    /// Values above one on an axis mean upscaling along that axis.
    ///
    /// # Errors
    /// [`ScaleError::ZeroDimension`] when either dimension of `self` is zero,
    /// [`ScaleError::Overflow`] when a dimension of either size is `i64::MIN`.
    pub fn scale_factor_to(&self, other: Size) -> Result<ScaleFactor, ScaleError> {
        if self.w == 0 || self.h == 0 {
            return Err(ScaleError::ZeroDimension { size: *self });
        }
        self.check_negatable()?;
        other.check_negatable()?;
        Ok(ScaleFactor {
            x: Rational::new(other.w, self.w),
            y: Rational::new(other.h, self.h),
        })
    }

    // Ratio reduction negates numerator and denominator.
    fn check_negatable(&self) -> Result<(), ScaleError> {
        if self.w.checked_neg().is_none() || self.h.checked_neg().is_none() {
            return Err(ScaleError::Overflow { size: *self });
        }
        Ok(())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('x');
        let (w, h) = match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => (w, h),
            _ => {
                return Err(SizeError::Separator {
                    input: s.to_string(),
                })
            }
        };
        Ok(Size::new(parse_component(s, w)?, parse_component(s, h)?))
    }
}

fn parse_component(input: &str, part: &str) -> Result<i64, SizeError> {
    part.trim()
        .parse::<i64>()
        .map_err(|source| SizeError::Component {
            input: input.to_string(),
            part: part.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_back() {
        for text in ["1920x1080", "640x480", "1x1", "2240x1260", "4056x3040"] {
            let size: Size = text.parse().unwrap();
            assert_eq!(size.to_string(), text);
        }
    }

    #[test]
    fn parse_keeps_components() {
        let size: Size = "1280x720".parse().unwrap();
        assert_eq!(size, Size::new(1280, 720));

        // integer parsing tolerates padding and an explicit sign
        let size: Size = " 1280 x+720".parse().unwrap();
        assert_eq!(size, Size::new(1280, 720));
    }

    #[test]
    fn rejects_wrong_separator_count() {
        for text in ["1920", "1920X1080", "1920*1080", "1x2x3", ""] {
            assert!(
                matches!(text.parse::<Size>(), Err(SizeError::Separator { .. })),
                "{text:?} should be a separator error"
            );
        }
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = "wide x1080".parse::<Size>().unwrap_err();
        match err {
            SizeError::Component { input, part, .. } => {
                assert_eq!(input, "wide x1080");
                assert_eq!(part, "wide ");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            "1920x".parse::<Size>(),
            Err(SizeError::Component { .. })
        ));
        assert!(matches!(
            "1.5x2".parse::<Size>(),
            Err(SizeError::Component { .. })
        ));
    }

    #[test]
    fn aspect_ratio_is_reduced() {
        let size = Size::new(1920, 1080);
        assert_eq!(size.aspect_ratio().unwrap(), Rational::new(16, 9));
        assert!(Size::new(1920, 0).aspect_ratio().is_err());
    }

    #[test]
    fn scale_factor_per_axis() {
        let factor = Size::new(640, 480)
            .scale_factor_to(Size::new(1600, 960))
            .unwrap();
        assert_eq!(factor.x, Rational::new(5, 2));
        assert_eq!(factor.y, Rational::from_integer(2));
    }

    #[test]
    fn scale_factor_from_zero_dimension_fails() {
        let zero = Size::new(0, 480);
        assert_eq!(
            zero.scale_factor_to(Size::new(640, 480)),
            Err(ScaleError::ZeroDimension { size: zero })
        );
        // a zero target is fine, only the divisor matters
        assert!(Size::new(640, 480).scale_factor_to(zero).is_ok());
    }

    #[test]
    fn negative_dimensions_give_negative_factors() {
        let factor = Size::new(640, 480)
            .scale_factor_to(Size::new(-640, 480))
            .unwrap();
        assert_eq!(factor.x, Rational::from_integer(-1));
        assert_eq!(factor.y, Rational::from_integer(1));
        assert_eq!(
            Size::new(-1920, 1080).aspect_ratio().unwrap(),
            Rational::new(-16, 9)
        );
    }

    #[test]
    fn min_dimension_is_overflow_not_panic() {
        let min: Size = "1x-9223372036854775808".parse().unwrap();
        let one = Size::new(1, 1);
        assert_eq!(
            one.scale_factor_to(min),
            Err(ScaleError::Overflow { size: min })
        );
        assert_eq!(
            min.scale_factor_to(one),
            Err(ScaleError::Overflow { size: min })
        );
        assert!(Size::new(i64::MIN, 1).aspect_ratio().is_err());

        let max = Size::new(i64::MAX, i64::MAX);
        let factor = one.scale_factor_to(max).unwrap();
        assert_eq!(factor.max(), Rational::from_integer(i64::MAX));
        assert_eq!(factor.max_recip().unwrap(), Rational::new(1, i64::MAX));
    }

    #[test]
    fn pixel_count_overflow() {
        assert_eq!(Size::new(2240, 1260).pixel_count(), Ok(2_822_400));
        assert!(Size::new(i64::MAX, 2).pixel_count().is_err());
    }
}
