//! # Resizer Hardware Limits
//!
//! The i.MX8MP ISP resizer has two fixed constraints that decide whether a
//! crop + resize request can run in a single pass:
//!
//! | Limit | Default | Meaning |
//! |-------|---------|---------|
//! | `max_output` | `2240x1260` | Largest output (2,822,400 px) the resizer may produce when upscaling |
//! | `max_upscale` | `2` | Largest per-axis upscale ratio in one pass |
//!
//! Both are compared with strict `>`, so a request sitting exactly on a limit
//! is accepted.
//!
//! ## Examples
//!
//! ```rust
//! use scaling_calc::config::HardwareLimits;
//! use scale_calc::{Rational, Size};
//!
//! // i.MX8MP defaults
//! let limits = HardwareLimits::default();
//! assert_eq!(limits.max_pixels(), Ok(2_822_400));
//!
//! // A hypothetical variant with a 4K budget and a 4x resizer
//! let limits = HardwareLimits::new(Size::new(3840, 2160), Rational::from_integer(4));
//! assert!(limits.validate().is_ok());
//! ```

use scale_calc::{Rational, ScaleError, Size};

/// Output width of the largest frame the resizer may upscale to.
pub const MAX_OUTPUT_WIDTH: i64 = 2240;
/// Output height of the largest frame the resizer may upscale to.
pub const MAX_OUTPUT_HEIGHT: i64 = 1260;
/// Largest single-pass upscale ratio on either axis.
pub const MAX_UPSCALE: i64 = 2;

/// Limits a resizer request is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HardwareLimits {
    /// Output frame whose pixel count is the upscaling budget.
    pub max_output: Size,

    /// Largest allowed crop-to-output factor on either axis.
    pub max_upscale: Rational,
}

impl Default for HardwareLimits {
    /// i.MX8MP ISP values: 2240x1260 output budget, 2x upscale.
    fn default() -> Self {
        Self {
            max_output: Size::new(MAX_OUTPUT_WIDTH, MAX_OUTPUT_HEIGHT),
            max_upscale: Rational::from_integer(MAX_UPSCALE),
        }
    }
}

impl HardwareLimits {
    pub fn new(max_output: Size, max_upscale: Rational) -> Self {
        Self {
            max_output,
            max_upscale,
        }
    }

    /// Pixel budget, `max_output.w * max_output.h`.
    pub fn max_pixels(&self) -> Result<i64, ScaleError> {
        self.max_output.pixel_count()
    }

    /// Validates the limits.
    ///
    /// Both output dimensions and the upscale ratio must be positive, and the
    /// pixel budget must fit in an `i64`.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_output.w <= 0 || self.max_output.h <= 0 {
            return Err(format!(
                "Maximum output size must be positive, got {}",
                self.max_output
            ));
        }
        if self.max_upscale <= Rational::from_integer(0) {
            return Err(format!(
                "Maximum upscale must be greater than 0, got {}",
                self.max_upscale
            ));
        }
        self.max_pixels().map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = HardwareLimits::default();
        assert_eq!(limits.max_output, Size::new(2240, 1260));
        assert_eq!(limits.max_upscale, Rational::from_integer(2));
        assert_eq!(limits.max_pixels(), Ok(2240 * 1260));
    }

    #[test]
    fn test_limits_validation() {
        let mut limits = HardwareLimits::default();
        assert!(limits.validate().is_ok());

        limits.max_output = Size::new(0, 1260);
        assert!(limits.validate().is_err());
        limits.max_output = Size::new(2240, -1);
        assert!(limits.validate().is_err());
        limits.max_output = Size::new(i64::MAX, 2);
        assert!(limits.validate().is_err());
        limits.max_output = Size::new(2240, 1260); // Reset

        limits.max_upscale = Rational::from_integer(0);
        assert!(limits.validate().is_err());
        limits.max_upscale = Rational::new(3, 2);
        assert!(limits.validate().is_ok());
    }
}
