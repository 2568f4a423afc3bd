//! Report generation module.
//!
//! # Module Organization
//!
//! - `average` - the `Report` trait and the average-by-group engine
//! - `registry` - static identifier → constructor lookup
//! - `export` - JSON output format

mod average;
mod export;
mod registry;

pub use average::{AverageReport, Report};
pub use export::write_json;
pub use registry::get_report;
