// logbook - core/parser.rs
//
// Line-oriented log parsing.
// Core layer: accepts BufRead trait objects, never touches the filesystem.

use crate::core::model::{LogRecord, LogStore};
use crate::util::logging::preview;
use std::io::{self, BufRead};

/// Parse one raw log line of the form `<date> <time> <LEVEL> <message...>`.
///
/// The line is trimmed, the first three whitespace-delimited tokens become
/// date, time and level, and the rest is the message with its inner spacing
/// untouched. Returns `None` when fewer than four fields are present; the
/// caller is expected to skip such lines.
pub fn parse_line(line: &str, line_number: u64) -> Option<LogRecord> {
    let rest = line.trim();

    let (date, rest) = split_token(rest)?;
    let (time, rest) = split_token(rest)?;
    let (level, message) = split_token(rest)?;

    if message.is_empty() {
        return None;
    }

    Some(LogRecord {
        line_number,
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_uppercase(),
        message: message.to_string(),
    })
}

/// Split `s` at its first whitespace run.
///
/// Returns the leading token and the remainder with leading whitespace
/// removed. `None` when `s` has no whitespace (a token with nothing after it).
fn split_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], s[end..].trim_start()))
}

/// Read every line from `reader` and collect the records that parse.
///
/// Malformed lines are counted in `lines_skipped` and otherwise ignored.
/// I/O errors (including invalid UTF-8) abort the read.
pub fn parse_lines<R: BufRead>(reader: R) -> io::Result<LogStore> {
    let mut store = LogStore::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx as u64 + 1;
        store.lines_read += 1;

        match parse_line(&line, line_number) {
            Some(record) => store.records.push(record),
            None => {
                store.lines_skipped += 1;
                tracing::trace!(
                    line = line_number,
                    text = preview(&line),
                    "Skipping line with fewer than four fields"
                );
            }
        }
    }

    Ok(store)
}
