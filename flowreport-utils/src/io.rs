//! Module to load flow-monitor exports and to persist generated files without leaving partially
//! written output behind.

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot infer the input format of {0:?} (expected .csv, .csv.gz or .json)")]
    UnsupportedFormat(PathBuf),
}

/// File formats accepted for flow-monitor exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    CsvGz,
    Json,
}

impl InputFormat {
    /// Infer the format from the file name.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".csv.gz") {
            Some(Self::CsvGz)
        } else if name.ends_with(".csv") {
            Some(Self::Csv)
        } else if name.ends_with(".json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Load all records stored in `path`. The format is inferred from the file name, see
/// [`InputFormat::from_path`]. Records are returned in file order.
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();
    let format =
        InputFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;
    log::info!("Loading: {path:?}");

    let reader = BufReader::new(File::open(path)?);
    let records: Vec<T> = match format {
        InputFormat::Csv => read_csv(reader)?,
        InputFormat::CsvGz => read_csv(GzDecoder::new(reader))?,
        InputFormat::Json => serde_json::from_reader(reader)?,
    };

    log::debug!("Loaded {} records from {path:?}", records.len());
    Ok(records)
}

/// Deserialize all rows of a CSV stream with a header row.
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

/// Write `contents` to `path` through a temporary file in the same directory that is renamed onto
/// `path` once everything is flushed. On error, `path` is left untouched.
pub fn write_atomically(path: impl AsRef<Path>, contents: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::trace!("persisted {} bytes to {path:?}", contents.len());
    Ok(())
}
