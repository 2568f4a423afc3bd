//! JSON export for generated reports.
//!
//! The alternative output surface to the console table, selected with
//! `--json`.

use std::io::Write;

use crate::types::ReportRow;

/// Write a report as pretty-printed JSON.
///
/// The envelope carries the report identifier and column labels alongside
/// the rows, so the output is self-describing.
pub fn write_json<W: Write>(
    writer: &mut W,
    report_name: &str,
    columns: (&str, &str),
    rows: &[ReportRow],
) -> std::io::Result<()> {
    use serde_json::json;

    let report = json!({
        "report": report_name,
        "columns": [columns.0, columns.1],
        "rows": rows,
    });

    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_envelope() {
        let rows = vec![ReportRow::new("USA", 250.0), ReportRow::new("Germany", 250.0)];
        let mut buffer = Vec::new();

        write_json(&mut buffer, "average-gdp", ("Country", "Average GDP"), &rows).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["report"], "average-gdp");
        assert_eq!(value["columns"][0], "Country");
        assert_eq!(value["rows"][0]["key"], "USA");
        assert_eq!(value["rows"][0]["aggregate"], 250.0);
    }

    #[test]
    fn test_write_json_empty_report() {
        let mut buffer = Vec::new();

        write_json(&mut buffer, "average-gdp", ("Country", "Average GDP"), &[]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_write_json_unavailable_aggregate_is_null() {
        let rows = vec![ReportRow { key: "USA".to_string(), aggregate: None }];
        let mut buffer = Vec::new();

        write_json(&mut buffer, "average-gdp", ("Country", "Average GDP"), &rows).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(value["rows"][0]["aggregate"].is_null());
    }
}
