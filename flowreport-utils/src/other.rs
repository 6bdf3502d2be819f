//! Module containing some utility functions that didn't fit anywhere else.

use std::path::{Path, PathBuf};

use time::{macros::format_description, OffsetDateTime};

/// Produces a timestamp `String` of the current time in YYYY-MM-DD_HH-mm-SS format.
pub fn get_timestamp() -> Result<String, time::error::Format> {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(format_description!(
            "[year]-[month]-[day]_[hour]-[minute]-[second]"
        ))
}

/// Inserts `_<timestamp>` between the file stem and the extension of `path`, e.g.
/// `results.csv` becomes `results_2025-01-31_12-00-00.csv`.
pub fn with_timestamp(path: impl AsRef<Path>, timestamp: &str) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_{timestamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{timestamp}"),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timestamp_is_inserted_before_extension() {
        assert_eq!(
            with_timestamp("out/results.csv", "2025-01-31_12-00-00"),
            PathBuf::from("out/results_2025-01-31_12-00-00.csv")
        );
        assert_eq!(
            with_timestamp("results", "2025-01-31_12-00-00"),
            PathBuf::from("results_2025-01-31_12-00-00")
        );
    }

    #[test]
    fn timestamp_format() {
        let ts = get_timestamp().unwrap();
        // YYYY-MM-DD_HH-mm-SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "_");
    }
}
