// logbook - core/filter.rs
//
// Record selection for the detail listing and export.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;
use crate::util::error::FilterError;
use regex::{Regex, RegexBuilder};

/// Records whose level equals `level` (compared upper-cased), in original order.
///
/// An unknown level yields an empty vector, not an error.
pub fn filter_by_level(records: &[LogRecord], level: &str) -> Vec<LogRecord> {
    let wanted = level.to_uppercase();
    records
        .iter()
        .filter(|record| record.level == wanted)
        .cloned()
        .collect()
}

/// Compile a case-insensitive message pattern.
///
/// An empty pattern means "no pattern".
pub fn compile_pattern(pattern: &str) -> Result<Option<Regex>, FilterError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
    Ok(Some(regex))
}

/// Records whose message matches `pattern`, in original order.
pub fn filter_by_message(records: &[LogRecord], pattern: &Regex) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| pattern.is_match(&record.message))
        .cloned()
        .collect()
}
