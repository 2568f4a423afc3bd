//! Average-by-group report engine.

use log::debug;
use std::collections::HashMap;

use crate::types::{ReportRow, Row};

/// A report engine: turns loaded rows into an ordered result set.
///
/// Implementations are registered by name in the report registry.
pub trait Report {
    /// Column headings for presentation: the group-key column, then the
    /// aggregate column.
    fn columns(&self) -> (&str, &str);

    /// Generate the ordered report rows.
    ///
    /// Pure function of its input. Rows that cannot contribute a value are
    /// skipped silently, never surfaced as errors.
    fn generate(&self, rows: &[Row]) -> Vec<ReportRow>;
}

/// Averages a numeric field per group-key field, sorted by mean descending.
pub struct AverageReport {
    group_field: &'static str,
    value_field: &'static str,
    key_label: &'static str,
    value_label: &'static str,
}

impl AverageReport {
    pub fn new(
        group_field: &'static str,
        value_field: &'static str,
        key_label: &'static str,
        value_label: &'static str,
    ) -> Self {
        Self { group_field, value_field, key_label, value_label }
    }

    /// Extract the group key and parsed value from one row.
    ///
    /// Returns None when either field is absent, the value is empty, or the
    /// value does not parse as a float.
    fn parse_row<'a>(&self, row: &'a Row) -> Option<(&'a str, f64)> {
        let key = row.get(self.group_field)?;
        let value = row.get(self.value_field)?.trim();
        if value.is_empty() {
            return None;
        }
        value.parse::<f64>().ok().map(|v| (key.as_str(), v))
    }
}

impl Report for AverageReport {
    fn columns(&self) -> (&str, &str) {
        (self.key_label, self.value_label)
    }

    fn generate(&self, rows: &[Row]) -> Vec<ReportRow> {
        // Accumulate per-group values in first-seen key order, so the final
        // sort breaks equal means deterministically.
        let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let Some((key, value)) = self.parse_row(row) else { continue };
            match index.get(key) {
                Some(&i) => groups[i].1.push(value),
                None => {
                    index.insert(key.to_string(), groups.len());
                    groups.push((key.to_string(), vec![value]));
                }
            }
        }

        debug!("{} groups with valid values from {} input rows", groups.len(), rows.len());

        let mut means: Vec<(String, f64)> = groups
            .into_iter()
            .map(|(key, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (key, mean)
            })
            .collect();

        // Stable sort: equal means keep first-seen order.
        means.sort_by(|a, b| b.1.total_cmp(&a.1));

        means.into_iter().map(|(key, mean)| ReportRow::new(key, mean)).collect()
    }
}
