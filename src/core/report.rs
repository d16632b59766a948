// logbook - core/report.rs
//
// Level tallies and their plain-text rendering.
// Rendering returns Strings; printing is left to the app layer.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants::{COUNT_COLUMN_RULE, COUNT_HEADER, LEVEL_HEADER};
use std::fmt::Write;

/// Count records per level in a single pass.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        *counts.entry(record.level.clone()).or_insert(0) += 1;
    }
    counts
}

/// Render the two-column counts table, one row per level in ascending order.
///
/// `level_width` is the padded width of the level column. Levels longer than
/// the width are printed in full and push the separator out of line.
pub fn render_counts(counts: &LevelCounts, level_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{LEVEL_HEADER:<level_width$} | {COUNT_HEADER}");
    let _ = writeln!(
        out,
        "{}|{}",
        "-".repeat(level_width + 1),
        "-".repeat(COUNT_COLUMN_RULE)
    );
    for (level, count) in counts {
        let _ = writeln!(out, "{level:<level_width$} | {count}");
    }
    out
}

/// Render the detail block listing `records` for `level`.
///
/// Starts with a blank line so it reads as a separate section after the table.
pub fn render_details(level: &str, records: &[LogRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Log details for level \"{}\":", level.to_uppercase());
    for record in records {
        let _ = writeln!(out, "{} {} - {}", record.date, record.time, record.message);
    }
    out
}
