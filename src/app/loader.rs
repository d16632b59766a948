// logbook - app/loader.rs
//
// Loads a log file from disk into a LogStore.
// The file is read once, line by line, and closed when the reader drops.

use crate::core::model::LogStore;
use crate::core::parser::parse_lines;
use crate::util::error::LoadError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Read and parse the log file at `path`.
///
/// A missing file maps to `LoadError::NotFound`; every other failure,
/// including invalid UTF-8 part-way through, maps to `LoadError::Io`.
pub fn load_logs(path: &Path) -> Result<LogStore, LoadError> {
    let file = File::open(path).map_err(|e| classify(path, e))?;
    let store = parse_lines(BufReader::new(file)).map_err(|e| classify(path, e))?;

    tracing::debug!(
        path = %path.display(),
        records = store.len(),
        lines = store.lines_read,
        skipped = store.lines_skipped,
        "Log file loaded"
    );

    Ok(store)
}

fn classify(path: &Path, err: io::Error) -> LoadError {
    if err.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
