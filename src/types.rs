/// Core data structures for report generation
///
/// This module defines the row and report-row types shared by the loader,
/// the report engines, and the presentation layer.

use std::collections::HashMap;

/// A single input record: header field name mapped to the raw field value
/// as read from the source file. No schema is enforced; each report engine
/// decides which fields it needs.
pub type Row = HashMap<String, String>;

/// One entry in a generated report
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRow {
    /// Group key (e.g. a country name)
    pub key: String,

    /// Computed aggregate; None means the value is unavailable
    pub aggregate: Option<f64>,
}

impl ReportRow {
    pub fn new(key: impl Into<String>, aggregate: f64) -> Self {
        Self { key: key.into(), aggregate: Some(aggregate) }
    }

    /// Aggregate formatted for display; unavailable values render as "n/a"
    pub fn aggregate_display(&self) -> String {
        match self.aggregate {
            Some(value) => format!("{}", value),
            None => "n/a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_display_formats_whole_means_without_fraction() {
        assert_eq!(ReportRow::new("USA", 250.0).aggregate_display(), "250");
    }

    #[test]
    fn test_aggregate_display_keeps_fractional_part() {
        assert_eq!(ReportRow::new("France", 123.45).aggregate_display(), "123.45");
    }

    #[test]
    fn test_aggregate_display_unavailable() {
        let row = ReportRow { key: "USA".to_string(), aggregate: None };
        assert_eq!(row.aggregate_display(), "n/a");
    }
}
