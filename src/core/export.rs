// logbook - core/export.rs
//
// CSV and JSON export of selected log records.
// Core layer: writes to any Write trait object; the path is only carried
// for error context.

use crate::core::model::LogRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format for `--export`, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export records to CSV.
///
/// Writes: line, date, time, level, message
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut count = 0;
    for record in records {
        csv_writer.serialize(record).map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;
        count += 1;
    }

    // serialize() only emits the header alongside the first row.
    if count == 0 {
        csv_writer
            .write_record(["line", "date", "time", "level", "message"])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records as a pretty-printed JSON array.
pub fn export_json<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

/// Export in the given format.
pub fn export<W: Write>(
    format: ExportFormat,
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records, writer, export_path),
        ExportFormat::Json => export_json(records, writer, export_path),
    }
}
