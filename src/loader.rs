//! CSV row loading.
//!
//! Reads delimited files into field-keyed rows. Files are read in argument
//! order and concatenated into one row sequence; loading stops at the first
//! file that fails.

use log::debug;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::Row;

/// Failure while loading an input file. Both kinds carry the offending path.
#[derive(Debug)]
pub enum LoadError {
    /// The path does not exist
    NotFound { path: PathBuf },
    /// The file exists but could not be opened, read, or decoded
    Read { path: PathBuf, detail: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound { path } => write!(f, "file not found: {}", path.display()),
            LoadError::Read { path, detail } => {
                write!(f, "failed to read {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load every file in order, returning the concatenated row sequence.
///
/// Each row maps the file's header fields to that record's values. Records
/// shorter than the header simply lack the trailing keys. Header-only and
/// wholly empty files contribute zero rows.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<Row>, LoadError> {
    let mut rows = Vec::new();

    for path in paths {
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let before = rows.len();
        read_rows(path, file, &mut rows)?;
        debug!("loaded {} rows from {}", rows.len() - before, path.display());
    }

    Ok(rows)
}

fn open_error(path: &Path, err: io::Error) -> LoadError {
    if err.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound { path: path.to_path_buf() }
    } else {
        LoadError::Read { path: path.to_path_buf(), detail: err.to_string() }
    }
}

fn read_error(path: &Path, err: csv::Error) -> LoadError {
    LoadError::Read { path: path.to_path_buf(), detail: err.to_string() }
}

fn read_rows(path: &Path, file: File, rows: &mut Vec<Row>) -> Result<(), LoadError> {
    // Records shorter or longer than the header are data problems for the
    // report engines to skip, not load failures.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();

    for record in reader.records() {
        let record = record.map_err(|e| read_error(path, e))?;
        let mut row = Row::new();
        for (i, value) in record.iter().enumerate() {
            if let Some(name) = headers.get(i) {
                row.insert(name.to_string(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_single_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "data.csv",
            "country,year,gdp\nUnited States,2023,25462\nChina,2023,17963\n",
        );

        let rows = load_files(&[path]).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["country"], "United States");
        assert_eq!(rows[0]["year"], "2023");
        assert_eq!(rows[0]["gdp"], "25462");
        assert_eq!(rows[1]["country"], "China");
    }

    #[test]
    fn test_load_multiple_files_concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        let first = write_fixture(&dir, "a.csv", "country,gdp\nUSA,100\n");
        let second = write_fixture(&dir, "b.csv", "country,gdp\nGermany,200\nJapan,300\n");

        let rows = load_files(&[first, second]).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["country"], "USA");
        assert_eq!(rows[1]["country"], "Germany");
        assert_eq!(rows[2]["country"], "Japan");
    }

    #[test]
    fn test_load_empty_file_yields_no_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.csv", "");

        let rows = load_files(&[path]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_header_only_file_yields_no_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "headers.csv", "country,gdp\n");

        let rows = load_files(&[path]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_quoted_field_keeps_embedded_separator() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "quoted.csv", "country,gdp\n\"Germany, EU\",200\n");

        let rows = load_files(&[path]).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["country"], "Germany, EU");
        assert_eq!(rows[0]["gdp"], "200");
    }

    #[test]
    fn test_field_values_are_not_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "spaces.csv", "country,gdp\n Germany, 200\n");

        let rows = load_files(&[path]).unwrap();
        assert_eq!(rows[0]["country"], " Germany");
        assert_eq!(rows[0]["gdp"], " 200");
    }

    #[test]
    fn test_short_record_lacks_trailing_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "short.csv", "country,gdp\nUSA\nGermany,200\n");

        let rows = load_files(&[path]).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["country"], "USA");
        assert!(!rows[0].contains_key("gdp"));
        assert_eq!(rows[1]["gdp"], "200");
    }

    #[test]
    fn test_missing_file_reports_not_found_with_path() {
        let missing = PathBuf::from("no-such-file.csv");

        let err = load_files(&[missing.clone()]).unwrap_err();

        match &err {
            LoadError::NotFound { path } => assert_eq!(path, &missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(err.to_string().contains("no-such-file.csv"));
    }

    #[test]
    fn test_loading_stops_at_first_missing_file() {
        let dir = TempDir::new().unwrap();
        let valid = write_fixture(&dir, "valid.csv", "country,gdp\nUSA,100\n");
        let missing = dir.path().join("missing.csv");

        let err = load_files(&[valid, missing.clone()]).unwrap_err();

        match err {
            LoadError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_read_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.csv");
        fs::write(&path, b"country,gdp\nM\xe9xico,100\n").unwrap();

        let err = load_files(&[path.clone()]).unwrap_err();

        match &err {
            LoadError::Read { path: p, .. } => assert_eq!(p, &path),
            other => panic!("expected Read, got {:?}", other),
        }
        assert!(err.to_string().contains("latin1.csv"));
    }
}
