// logbook - app/log_stats.rs
//
// One run of the log-stats tool: load, count, print the table, then
// optionally list and export the records for one level.

use crate::app::loader::load_logs;
use crate::core::export::{export, ExportFormat};
use crate::core::filter::{compile_pattern, filter_by_level, filter_by_message};
use crate::core::model::LogRecord;
use crate::core::report::{count_by_level, render_counts, render_details};
use crate::util::constants;
use crate::util::error::{ExportError, LogbookError, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything a single log-stats run needs.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Log file to read.
    pub path: PathBuf,
    /// Level whose records are listed after the table.
    pub level: Option<String>,
    /// Case-insensitive regex narrowing the selected records by message.
    pub grep: Option<String>,
    /// Where to write the selected records.
    pub export: Option<PathBuf>,
    /// Width of the level column.
    pub level_column_width: usize,
}

impl StatsOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: None,
            grep: None,
            export: None,
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
        }
    }

    /// The requested level, with blank or whitespace-only values treated as absent.
    pub fn level(&self) -> Option<&str> {
        self.level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }
}

/// Run the tool, writing the report to `out`.
///
/// Nothing is written to `out` if the log file cannot be loaded. A blank
/// level counts as no level. The selection (level, then `grep`) is only
/// built when the details listing or an export needs it.
pub fn run<W: Write>(options: &StatsOptions, out: &mut W) -> Result<()> {
    // Reject a bad pattern before touching the file.
    let pattern = match options.grep.as_deref() {
        Some(p) => compile_pattern(p)?,
        None => None,
    };
    let level = options.level();

    let store = load_logs(&options.path)?;
    let counts = count_by_level(&store.records);

    write_report(out, &render_counts(&counts, options.level_column_width))?;

    if level.is_none() && options.export.is_none() {
        if pattern.is_some() {
            tracing::warn!("--grep has no effect without a level or --export");
        }
        return Ok(());
    }

    let mut selected: Cow<'_, [LogRecord]> = match level {
        Some(level) => Cow::Owned(filter_by_level(&store.records, level)),
        None => Cow::Borrowed(&store.records),
    };
    if let Some(ref pattern) = pattern {
        selected = Cow::Owned(filter_by_message(&selected, pattern));
    }

    if let Some(level) = level {
        tracing::debug!(level, matches = selected.len(), "Listing records for level");
        write_report(out, &render_details(level, &selected))?;
    }

    if let Some(ref export_path) = options.export {
        let written = export_records(&selected, export_path)?;
        tracing::info!(path = %export_path.display(), records = written, "Export complete");
    }

    Ok(())
}

fn write_report<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| LogbookError::Io {
            operation: "writing report",
            source: e,
        })
}

fn export_records(records: &[LogRecord], path: &Path) -> std::result::Result<usize, ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let count = export(ExportFormat::from_path(path), records, &mut writer, path)?;
    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count)
}
