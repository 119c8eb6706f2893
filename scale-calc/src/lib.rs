// SPDX-License-Identifier: MIT
//! # scale-calc: Exact Frame Geometry for Resizer Planning
//!
//! This crate provides the small amount of geometry needed to reason about an ISP
//! crop + resize chain: frame sizes parsed from `WxH` strings and the per-axis
//! scale factors between two sizes.
//!
//! ## Exact Arithmetic
//!
//! Every ratio is a reduced fraction ([`Rational`]), never a float. Hardware limits
//! are compared with strict `>` at exact boundaries (a 2× limit against a 2/1
//! request, a pixel budget against `w*h`), so rounding would flip verdicts.
//!
//! ## Key Components
//!
//! - [`size`]: the [`Size`] type and its `WxH` parser
//! - [`factor`]: per-axis [`ScaleFactor`] between two sizes
//! - [`error`]: parse and division errors
//!
//! ## Usage Example
//!
//! ```rust
//! use scale_calc::{Rational, Size};
//!
//! let crop: Size = "640x480".parse()?;
//! let out: Size = "1600x960".parse()?;
//!
//! let factor = crop.scale_factor_to(out)?;
//! assert_eq!(factor.x, Rational::new(5, 2));
//! assert_eq!(factor.y, Rational::from_integer(2));
//! assert_eq!(factor.max(), Rational::new(5, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod factor;
pub mod size;

pub use error::{ScaleError, SizeError};
pub use factor::ScaleFactor;
pub use size::Size;

/// Exact rational used for every scale ratio in this crate.
pub type Rational = num::rational::Ratio<i64>;
