// logbook - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// Log Record (output of line parsing)
// =============================================================================

/// A single parsed log line.
///
/// Produced by `core::parser::parse_line` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Line number in the source file (1-based).
    #[serde(rename = "line")]
    pub line_number: u64,

    /// First field, kept verbatim.
    pub date: String,

    /// Second field, kept verbatim.
    pub time: String,

    /// Third field, upper-cased so comparisons are case-insensitive.
    pub level: String,

    /// Everything after the level, embedded whitespace preserved.
    pub message: String,
}

// =============================================================================
// Log Store (output of loading a file)
// =============================================================================

/// Ordered sequence of records read from one log file.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    /// Parsed records in file order.
    pub records: Vec<LogRecord>,

    /// Total lines read from the source.
    pub lines_read: u64,

    /// Lines dropped because they had fewer than four fields.
    pub lines_skipped: u64,
}

impl LogStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Level counts
// =============================================================================

/// Level -> number of records with that level.
///
/// A `BTreeMap` so iteration is already in display (lexicographic) order.
/// Levels that never occurred are absent rather than zero.
pub type LevelCounts = BTreeMap<String, usize>;

// =============================================================================
// Contact
// =============================================================================

/// One entry of the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Unique key within a registry.
    pub name: String,

    /// Free-form phone text; never validated.
    pub phone: String,
}
