//! # Feasibility Calculation
//!
//! Decides whether the resizer can take a crop window of the input frame and
//! scale it to the requested output in one pass.
//!
//! ## Algorithm
//!
//! 1. **Effective scaling**: `1 / max(input → crop)`, how strongly the crop
//!    magnifies the original frame.
//! 2. **Resizer scaling**: `crop → output` per axis, the factor the resizer itself applies.
//! 3. **Oversize**: the output exceeds the pixel budget *and* the resizer upscales.
//!    Large outputs produced by downscaling are fine.
//! 4. **Overscale**: the resizer factor on either axis exceeds the upscale limit.
//!
//! All values are exact rationals, so requests sitting on a limit are judged
//! exactly (`2240x1260` is allowed, `2241x1260` is not).

use log::{debug, info, trace};
use scale_calc::{Rational, ScaleFactor, Size};

use crate::config::HardwareLimits;
use crate::error::{CalcError, CalcResult, SizeRole};

/// The three sizes of a crop + resize request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalingRequest {
    /// Full sensor/frame size.
    pub input: Size,
    /// Crop window taken out of `input`.
    pub crop: Size,
    /// Size the resizer must produce from the crop window.
    pub output: Size,
}

impl ScalingRequest {
    pub fn new(input: Size, crop: Size, output: Size) -> Self {
        Self {
            input,
            crop,
            output,
        }
    }

    /// Parse the three `WxH` arguments in order: input, crop window, output.
    pub fn parse(input: &str, crop: &str, output: &str) -> CalcResult<Self> {
        let parse = |text: &str, role| text.parse::<Size>().map_err(|e| CalcError::parse(role, e));
        Ok(Self {
            input: parse(input, SizeRole::Input)?,
            crop: parse(crop, SizeRole::Crop)?,
            output: parse(output, SizeRole::Output)?,
        })
    }
}

/// The two hardware checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Upscaled output exceeds the pixel budget.
    pub oversize: bool,
    /// Resizer factor exceeds the upscale limit.
    pub overscale: bool,
}

impl Verdict {
    pub fn new(oversize: bool, overscale: bool) -> Self {
        Self {
            oversize,
            overscale,
        }
    }

    pub fn is_feasible(&self) -> bool {
        !self.oversize && !self.overscale
    }

    /// The human readable verdict sentence.
    ///
    /// The wording is fixed and does not reflect overridden limits; scripts
    /// match on it.
    pub fn sentence(&self) -> String {
        let blocked = !self.is_feasible();
        let mut out = String::from("The scaling will ");
        if blocked {
            out.push_str("not ");
        }
        out.push_str("work");
        if blocked {
            out.push_str(", as ");
        }
        if self.oversize {
            out.push_str("the output of upscaling is too big (over 3MP)");
        }
        if self.oversize && self.overscale {
            out.push_str(", and ");
        }
        if self.overscale {
            out.push_str("the upscaling that the resizer needs to do is greater than x2");
        }
        out
    }
}

/// Everything computed for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feasibility {
    pub request: ScalingRequest,
    pub limits: HardwareLimits,
    /// `1 / max(input → crop)`.
    pub eff_scale: Rational,
    /// `crop → output` per axis.
    pub rsz_scale: ScaleFactor,
    pub verdict: Verdict,
}

/// Run the feasibility checks for `request` against `limits`.
///
/// # Errors
///
/// Returns [`CalcError::Scale`] when the input or crop size has a zero
/// dimension (division by zero), or when a pixel count overflows.
pub fn check_feasibility(
    request: &ScalingRequest,
    limits: &HardwareLimits,
) -> CalcResult<Feasibility> {
    debug!(
        "checking {} -> crop {} -> output {} against max output {}, max upscale {}",
        request.input, request.crop, request.output, limits.max_output, limits.max_upscale
    );

    let crop_scale = request
        .input
        .scale_factor_to(request.crop)
        .map_err(|e| CalcError::scale(SizeRole::Input, e))?;
    trace!("input -> crop factor {crop_scale}");
    let eff_scale = crop_scale
        .max_recip()
        .map_err(|e| CalcError::scale(SizeRole::Crop, e))?;

    let rsz_scale = request
        .crop
        .scale_factor_to(request.output)
        .map_err(|e| CalcError::scale(SizeRole::Crop, e))?;
    trace!("crop -> output factor {rsz_scale}");

    let out_pixels = request
        .output
        .pixel_count()
        .map_err(|e| CalcError::scale(SizeRole::Output, e))?;
    let max_pixels = limits
        .max_pixels()
        .map_err(|e| CalcError::scale(SizeRole::Output, e))?;
    trace!("output pixels {out_pixels}, budget {max_pixels}");

    let verdict = Verdict {
        oversize: out_pixels > max_pixels && rsz_scale.is_upscale(),
        overscale: rsz_scale.exceeds(limits.max_upscale),
    };
    info!(
        "effective scaling x{eff_scale}, resizer scaling {rsz_scale}: oversize={}, overscale={}",
        verdict.oversize, verdict.overscale
    );

    Ok(Feasibility {
        request: *request,
        limits: *limits,
        eff_scale,
        rsz_scale,
        verdict,
    })
}
