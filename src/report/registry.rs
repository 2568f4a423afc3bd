//! Static name → report constructor lookup.
//!
//! Adding a report means adding one entry to `REPORTS`; the lookup logic
//! never changes.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::Report;
use super::average::AverageReport;

type Constructor = fn() -> Box<dyn Report>;

fn average_gdp() -> Box<dyn Report> {
    Box::new(AverageReport::new("country", "gdp", "Country", "Average GDP"))
}

/// Known reports, keyed by the exact identifier the CLI accepts.
static REPORTS: &[(&str, Constructor)] = &[("average-gdp", average_gdp)];

lazy_static! {
    static ref LOOKUP: HashMap<&'static str, Constructor> = REPORTS.iter().copied().collect();
}

/// Look up a report constructor by identifier and instantiate it.
///
/// Matching is exact and case-sensitive. Unknown names return None so the
/// caller can produce the user-facing error.
pub fn get_report(name: &str) -> Option<Box<dyn Report>> {
    LOOKUP.get(name).map(|constructor| constructor())
}
