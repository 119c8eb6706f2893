//! # Report Rendering
//!
//! Turns a [`Feasibility`] into what the binary prints on stdout.
//!
//! ## Text (default)
//!
//! ```text
//! Effective scaling: x2
//! Resizer scaling: (5/2, 2)
//! The scaling will not work, as the upscaling that the resizer needs to do is greater than x2
//! ```
//!
//! Ratios print as reduced fractions (`3/2`), whole numbers without a denominator.
//!
//! ## JSON
//!
//! One object carrying the same values, for scripts. Ratios stay strings so no
//! precision is lost.

use serde::Serialize;

use crate::error::CalcResult;
use crate::feasibility::Feasibility;

/// Output format of the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Three human readable lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    input: String,
    crop: String,
    output: String,
    effective_scaling: String,
    resizer_scaling: [String; 2],
    oversize: bool,
    overscale: bool,
    feasible: bool,
    verdict: String,
}

impl From<&Feasibility> for JsonReport {
    fn from(f: &Feasibility) -> Self {
        Self {
            input: f.request.input.to_string(),
            crop: f.request.crop.to_string(),
            output: f.request.output.to_string(),
            effective_scaling: f.eff_scale.to_string(),
            resizer_scaling: [f.rsz_scale.x.to_string(), f.rsz_scale.y.to_string()],
            oversize: f.verdict.oversize,
            overscale: f.verdict.overscale,
            feasible: f.verdict.is_feasible(),
            verdict: f.verdict.sentence(),
        }
    }
}

/// Render the report; the result has no trailing newline.
pub fn render(feasibility: &Feasibility, format: ReportFormat) -> CalcResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(feasibility)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport::from(
            feasibility,
        ))?),
    }
}

fn render_text(f: &Feasibility) -> String {
    format!(
        "Effective scaling: x{}\nResizer scaling: {}\n{}",
        f.eff_scale,
        f.rsz_scale,
        f.verdict.sentence()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HardwareLimits;
    use crate::feasibility::{check_feasibility, ScalingRequest};

    fn feasibility(input: &str, crop: &str, output: &str) -> Feasibility {
        let request = ScalingRequest::parse(input, crop, output).unwrap();
        check_feasibility(&request, &HardwareLimits::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let f = feasibility("1280x960", "640x480", "1600x960");
        assert_eq!(
            render(&f, ReportFormat::Text).unwrap(),
            "Effective scaling: x2\n\
             Resizer scaling: (5/2, 2)\n\
             The scaling will not work, as the upscaling that the resizer needs to do is greater than x2"
        );
    }

    #[test]
    fn test_json_report() {
        let f = feasibility("1920x1080", "960x540", "1920x1080");
        let json = render(&f, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["input"], "1920x1080");
        assert_eq!(value["crop"], "960x540");
        assert_eq!(value["effective_scaling"], "2");
        assert_eq!(value["resizer_scaling"], serde_json::json!(["2", "2"]));
        assert_eq!(value["oversize"], false);
        assert_eq!(value["overscale"], false);
        assert_eq!(value["feasible"], true);
        assert_eq!(value["verdict"], "The scaling will work");
    }
}
