//! # Error Handling
//!
//! Errors produced while turning three `WxH` arguments into a feasibility
//! verdict. Each error records which of the three sizes it came from, so the
//! binary can report `invalid crop window size ...` instead of a bare parse
//! failure.
//!
//! ## Classification
//!
//! - **Parse**: a size string is not `WxH` with integer sides
//! - **Scale**: a ratio would divide by zero or a pixel count overflows
//! - **Report**: the JSON report could not be serialized
//!
//! None of these are recoverable; the binary prints them and exits non-zero.
//!
//! ## Usage
//!
//! ```rust
//! use scaling_calc::error::{CalcError, SizeRole};
//!
//! let err = "640-480".parse::<scale_calc::Size>().unwrap_err();
//! let err = CalcError::parse(SizeRole::Crop, err);
//! assert_eq!(err.role(), Some(SizeRole::Crop));
//! assert!(err.to_string().starts_with("invalid crop window size"));
//! ```

use std::fmt;

use scale_calc::{ScaleError, SizeError};

/// Which of the three positional sizes an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRole {
    Input,
    Crop,
    Output,
}

impl fmt::Display for SizeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeRole::Input => "input size",
            SizeRole::Crop => "crop window size",
            SizeRole::Output => "output size",
        })
    }
}

/// Error type for feasibility calculations.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("invalid {role}")]
    Parse {
        role: SizeRole,
        #[source]
        source: SizeError,
    },
    #[error("cannot derive scaling from {role}")]
    Scale {
        role: SizeRole,
        #[source]
        source: ScaleError,
    },
    #[error("failed to serialize report")]
    Report(#[from] serde_json::Error),
}

/// Result alias used across the library.
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    pub fn parse(role: SizeRole, source: SizeError) -> Self {
        CalcError::Parse { role, source }
    }

    pub fn scale(role: SizeRole, source: ScaleError) -> Self {
        CalcError::Scale { role, source }
    }

    /// The size argument this error refers to, if any.
    pub fn role(&self) -> Option<SizeRole> {
        match self {
            CalcError::Parse { role, .. } | CalcError::Scale { role, .. } => Some(*role),
            CalcError::Report(_) => None,
        }
    }

    /// True for division-by-zero failures.
    pub fn is_division(&self) -> bool {
        matches!(
            self,
            CalcError::Scale {
                source: ScaleError::ZeroDimension { .. } | ScaleError::ZeroFactor { .. },
                ..
            }
        )
    }
}
