// logbook - util/constants.rs
//
// Single source of truth for named constants, limits, defaults, and the
// fixed user-facing strings of both tools.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logbook";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "logbook";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report layout
// =============================================================================

/// Default width of the level column in the counts table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 15;

/// Minimum configurable level column width.
pub const MIN_LEVEL_COLUMN_WIDTH: usize = 5;

/// Maximum configurable level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

/// Number of dashes under the "Count" header.
pub const COUNT_COLUMN_RULE: usize = 7;

/// Header text of the level column.
pub const LEVEL_HEADER: &str = "Log Level";

/// Header text of the count column.
pub const COUNT_HEADER: &str = "Count";

// =============================================================================
// Contact bot
// =============================================================================

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Longest prompt accepted from config.toml.
pub const MAX_PROMPT_LEN: usize = 80;

/// Printed once when the REPL starts.
pub const BOT_WELCOME: &str = "Welcome to the assistant bot!";

/// Printed on close/exit.
pub const BOT_FAREWELL: &str = "Good bye!";

/// Reply to `hello`.
pub const BOT_GREETING: &str = "How can I help you?";

/// Reply to any unrecognised command, including empty input.
pub const BOT_INVALID_COMMAND: &str = "Invalid command. Please try again.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at "warn" so interactive sessions stay quiet.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a raw line included in trace output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
