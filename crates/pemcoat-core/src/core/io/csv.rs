use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableIoError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Writes an ordered row set to a headered CSV file.
///
/// Absent optional values are written as empty cells, so they reload as absent
/// rather than as zero or an empty string.
pub fn write_table<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<(), TableIoError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| TableIoError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    for row in rows {
        writer.serialize(row).map_err(|e| TableIoError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| TableIoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

/// Reads a headered CSV file into per-row results.
///
/// The outer error covers file-level failures (missing file, unreadable
/// header); the inner per-row results let batch importers skip a malformed row
/// with a warning instead of aborting the whole import.
pub fn read_rows<D: DeserializeOwned, P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Result<D, TableIoError>>, TableIoError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| TableIoError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let rows = reader
        .deserialize::<D>()
        .map(|result| {
            result.map_err(|e| TableIoError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })
        })
        .collect();

    Ok(rows)
}
