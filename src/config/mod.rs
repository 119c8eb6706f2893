//! # Configuration Module
//!
//! Hardware limits of the resizer being checked. There is no configuration file;
//! the defaults describe the i.MX8MP ISP and the CLI can override them per run.

pub mod limits;

pub use limits::{HardwareLimits, MAX_OUTPUT_HEIGHT, MAX_OUTPUT_WIDTH, MAX_UPSCALE};
