use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::FeatureDataset;

/// Column holding the track duration (x axis).
pub const DURATION_COLUMN: &str = "duration";
/// Column holding the danceability score (y axis).
pub const DANCEABILITY_COLUMN: &str = "danceability";
/// Column holding the spectral centroid (colour dimension).
pub const CENTROID_COLUMN: &str = "centroid";

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Loading failures.  Both variants are fatal: any bad input aborts the whole
/// load, there is no partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path is missing or unreadable.
    #[error("cannot open {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Missing required header columns, row shape mismatch, or a value that
    /// does not parse as a number.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a feature dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming at least `duration`, `danceability`,
///             `centroid`; additional columns are ignored
/// * `.json` – `[{ "duration": 120.5, "danceability": 0.8, "centroid": 0.42 }, ...]`
pub fn load_file(path: &Path) -> Result<FeatureDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv(open(path)?),
        "json" => read_json(open(path)?),
        other => Err(LoadError::MalformedInput(format!(
            "unsupported file extension: .{other}"
        ))),
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one track per record.
/// The three required columns hold plain decimal numbers; every record must
/// have the same field count as the header.
fn read_csv<R: io::Read>(input: R) -> Result<FeatureDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::MalformedInput(format!("reading CSV header: {e}")))?
        .clone();

    let duration_idx = column_index(&headers, DURATION_COLUMN)?;
    let danceability_idx = column_index(&headers, DANCEABILITY_COLUMN)?;
    let centroid_idx = column_index(&headers, CENTROID_COLUMN)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut color = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // The csv reader rejects records whose field count differs from the
        // header, which covers the row-shape check.
        let record =
            result.map_err(|e| LoadError::MalformedInput(format!("row {row_no}: {e}")))?;

        x.push(parse_field(&record, duration_idx, row_no, DURATION_COLUMN)?);
        y.push(parse_field(&record, danceability_idx, row_no, DANCEABILITY_COLUMN)?);
        color.push(parse_field(&record, centroid_idx, row_no, CENTROID_COLUMN)?);
    }

    Ok(FeatureDataset::new(x, y, color))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MalformedInput(format!("missing required column '{name}'")))
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    col: &str,
) -> Result<f64, LoadError> {
    let raw = record.get(idx).unwrap_or("");
    // "NaN" and "inf" parse as f64; required values must be finite.
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            LoadError::MalformedInput(format!(
                "row {row}, column '{col}': '{raw}' is not a finite number"
            ))
        })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record of the records-oriented JSON schema (the default
/// `df.to_json(orient='records')`).  Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct FeatureRecord {
    duration: f64,
    danceability: f64,
    centroid: f64,
}

fn read_json<R: io::Read>(input: R) -> Result<FeatureDataset, LoadError> {
    let records: Vec<FeatureRecord> = serde_json::from_reader(input)
        .map_err(|e| LoadError::MalformedInput(format!("parsing JSON: {e}")))?;

    let mut x = Vec::with_capacity(records.len());
    let mut y = Vec::with_capacity(records.len());
    let mut color = Vec::with_capacity(records.len());

    for rec in records {
        x.push(rec.duration);
        y.push(rec.danceability);
        color.push(rec.centroid);
    }

    Ok(FeatureDataset::new(x, y, color))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn csv_dataset(text: &str) -> Result<FeatureDataset, LoadError> {
        read_csv(text.as_bytes())
    }

    #[test]
    fn valid_csv_builds_parallel_series() {
        let ds = csv_dataset(
            "duration,danceability,centroid\n\
             120.5,0.8,0.42\n\
             200.0,0.3,0.9\n\
             95.25,0.61,0.15\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.x, vec![120.5, 200.0, 95.25]);
        assert_eq!(ds.y, vec![0.8, 0.3, 0.61]);
        assert_eq!(ds.color, vec![0.42, 0.9, 0.15]);
    }

    #[test]
    fn extra_columns_are_ignored_and_order_does_not_matter() {
        let ds = csv_dataset(
            "track,centroid,duration,tempo,danceability\n\
             a,0.42,120.5,128,0.8\n",
        )
        .unwrap();

        assert_eq!(ds.x, vec![120.5]);
        assert_eq!(ds.y, vec![0.8]);
        assert_eq!(ds.color, vec![0.42]);
    }

    #[test]
    fn header_only_file_yields_empty_dataset() {
        let ds = csv_dataset("duration,danceability,centroid\n").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_centroid_column_is_malformed() {
        let err = csv_dataset("duration,danceability\n120.5,0.8\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
        assert!(err.to_string().contains("centroid"));
    }

    #[test]
    fn non_numeric_duration_is_malformed() {
        let err =
            csv_dataset("duration,danceability,centroid\nabc,0.8,0.42\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn non_finite_values_are_malformed() {
        for row in ["NaN,0.8,0.42", "120.5,inf,0.42", "120.5,0.8,-inf"] {
            let input = format!("duration,danceability,centroid\n{row}\n");
            let err = csv_dataset(&input).unwrap_err();
            assert!(matches!(err, LoadError::MalformedInput(_)), "row: {row}");
            assert!(err.to_string().contains("finite"), "row: {row}");
        }
    }

    #[test]
    fn row_with_differing_field_count_is_malformed() {
        let err = csv_dataset(
            "duration,danceability,centroid\n\
             120.5,0.8,0.42\n\
             200.0,0.3\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn unsupported_extension_is_malformed() {
        let err = load_file(Path::new("data/out.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
    }

    #[test]
    fn load_file_reads_csv_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        write!(file, "duration,danceability,centroid\n120.5,0.8,0.42\n").unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.x, vec![120.5]);
        assert_eq!(ds.y, vec![0.8]);
        assert_eq!(ds.color, vec![0.42]);
    }

    #[test]
    fn valid_json_builds_parallel_series() {
        let ds = read_json(
            br#"[
                {"duration": 120.5, "danceability": 0.8, "centroid": 0.42, "track": "a"},
                {"duration": 200.0, "danceability": 0.3, "centroid": 0.9}
            ]"#
            .as_slice(),
        )
        .unwrap();

        assert_eq!(ds.x, vec![120.5, 200.0]);
        assert_eq!(ds.y, vec![0.8, 0.3]);
        assert_eq!(ds.color, vec![0.42, 0.9]);
    }

    #[test]
    fn json_with_non_numeric_value_is_malformed() {
        let err = read_json(
            br#"[{"duration": "abc", "danceability": 0.8, "centroid": 0.42}]"#.as_slice(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
    }
}
