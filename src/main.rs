use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use scaling_calc::{HardwareLimits, Rational, ReportFormat, ScalingRequest, Size};

const DEFAULT_NAME: &str = "imx8mp-scaling-calc";

/// Check whether the i.MX8MP ISP resizer can perform a crop + scale request:
/// - output pixel count must stay within 2240x1260 when upscaling
/// - per-axis upscale must not exceed x2
#[derive(Parser, Debug)]
#[command(name = "imx8mp-scaling-calc", version)]
#[command(about = "Check whether the i.MX8MP resizer can perform a crop + scale")]
struct Args {
    /// Input size, crop window size and output size, each as WxH
    ///
    /// Sizes may be negative (`-640x480`); options go before the sizes.
    #[arg(value_name = "WxH", allow_hyphen_values = true)]
    sizes: Vec<String>,

    /// Maximum output size the resizer may upscale to
    #[arg(long, value_name = "WxH", default_value = "2240x1260", value_parser = parse_size)]
    max_output: Size,

    /// Maximum per-axis upscale ratio (integer or p/q)
    #[arg(long, value_name = "RATIO", default_value = "2", value_parser = parse_ratio)]
    max_upscale: Rational,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::ValueValidation
            | ErrorKind::InvalidValue => e.exit(),
            _ => usage_exit(&program),
        },
    };
    if args.sizes.len() != 3 {
        usage_exit(&program);
    }

    init_logging(args.verbose);

    let limits = HardwareLimits::new(args.max_output, args.max_upscale);
    limits.validate().map_err(anyhow::Error::msg)?;

    let request = ScalingRequest::parse(&args.sizes[0], &args.sizes[1], &args.sizes[2])?;
    let feasibility = scaling_calc::calculate(&request, &limits)?;
    let report = scaling_calc::report::render(&feasibility, args.format)
        .context("Failed to render report")?;
    println!("{report}");
    Ok(())
}

fn usage_exit(program: &str) -> ! {
    println!("Usage: {program} <input size> <crop window size> <output size>");
    println!("    All sizes are in the format: WxH");
    std::process::exit(1);
}

/// Map the -v count onto a default filter; RUST_LOG still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Parse a WxH limit from the command line
fn parse_size(s: &str) -> Result<Size, String> {
    s.parse::<Size>().map_err(|e| e.to_string())
}

/// Parse an upscale limit such as "2" or "5/2"
fn parse_ratio(s: &str) -> Result<Rational, String> {
    s.trim()
        .parse::<Rational>()
        .map_err(|e| format!("Invalid ratio {s}: {e}"))
}
