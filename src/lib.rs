//! # i.MX8MP Resizer Scaling Calculator
//!
//! Checks whether the i.MX8MP ISP resizer can take a crop window out of an
//! input frame and scale it to a requested output size in a single pass.
//!
//! ## Architecture
//!
//! - `scale_calc` (workspace crate): sizes and exact per-axis scale factors
//! - [`config`]: resizer hardware limits and their defaults
//! - [`feasibility`]: effective/resizer scaling and the oversize/overscale checks
//! - [`report`]: text and JSON rendering of the result
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use scaling_calc::{calculate, HardwareLimits, ReportFormat, ScalingRequest};
//!
//! let request = ScalingRequest::parse("640x480", "640x480", "2241x1260")?;
//! let feasibility = calculate(&request, &HardwareLimits::default())?;
//! assert!(feasibility.verdict.oversize);
//! assert!(feasibility.verdict.overscale);
//!
//! let report = scaling_calc::report::render(&feasibility, ReportFormat::Text)?;
//! assert!(report.starts_with("Effective scaling: x1\n"));
//! # Ok::<(), scaling_calc::CalcError>(())
//! ```

pub mod config;
pub mod error;
pub mod feasibility;
pub mod report;

pub use config::HardwareLimits;
pub use error::{CalcError, CalcResult, SizeRole};
pub use feasibility::{Feasibility, ScalingRequest, Verdict};
pub use report::ReportFormat;
pub use scale_calc::{Rational, ScaleFactor, Size};

/// Run all checks for one request.
///
/// Thin entry point over [`feasibility::check_feasibility`] for callers that
/// only import the crate root.
pub fn calculate(request: &ScalingRequest, limits: &HardwareLimits) -> CalcResult<Feasibility> {
    feasibility::check_feasibility(request, limits)
}
