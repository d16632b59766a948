// logbook - platform/config.rs
//
// Config directory resolution and config.toml loading with validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for logbook configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logbook/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::debug!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of the default config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[bot]` section.
    pub bot: BotSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Width of the level column in the counts table.
    pub level_column_width: Option<usize>,
}

/// `[bot]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BotSection {
    /// Prompt printed before each command is read.
    pub prompt: Option<String>,
}

/// Validated configuration shared by both tools.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Width of the level column in the counts table.
    pub level_column_width: usize,
    /// REPL prompt.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            prompt: constants::DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Load config from an explicit `--config` path, or the platform default.
///
/// An explicit path that cannot be read is a hard error; everything else
/// degrades to defaults plus warnings.
pub fn load(explicit: Option<&Path>) -> Result<(AppConfig, Vec<ConfigError>), ConfigError> {
    match explicit {
        Some(path) => {
            std::fs::metadata(path).map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(load_config(path))
        }
        None => Ok(load_config(&PlatformPaths::resolve().config_file())),
    }
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with one warning.
///
/// Called before logging is initialised, so warnings are returned rather
/// than logged.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => validate(raw),
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            (AppConfig::default(), warnings)
        }
    }
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Report: level_column_width --
    if let Some(width) = raw.report.level_column_width {
        if (constants::MIN_LEVEL_COLUMN_WIDTH..=constants::MAX_LEVEL_COLUMN_WIDTH).contains(&width)
        {
            config.level_column_width = width;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "report.level_column_width".to_string(),
                value: width.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_LEVEL_COLUMN_WIDTH,
                    constants::MAX_LEVEL_COLUMN_WIDTH
                ),
            });
        }
    }

    // -- Bot: prompt --
    if let Some(prompt) = raw.bot.prompt {
        if !prompt.is_empty() && prompt.chars().count() <= constants::MAX_PROMPT_LEN {
            config.prompt = prompt;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "bot.prompt".to_string(),
                value: prompt,
                expected: format!("1-{} characters", constants::MAX_PROMPT_LEN),
            });
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (_dir, path) = write_config(
            r#"
[logging]
level = "DEBUG"

[report]
level_column_width = 20

[bot]
prompt = "> "
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.level_column_width, 20);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (_dir, path) = write_config(
            r#"
[logging]
level = "loud"

[report]
level_column_width = 500

[bot]
prompt = ""
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings
            .iter()
            .all(|w| matches!(w, ConfigError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_unparseable_file_gives_defaults_and_one_warning() {
        let (_dir, path) = write_config("[report\nlevel_column_width = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::TomlParse { .. }));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_dir, path) = write_config("[future]\nshiny = true\n");
        let (_config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_explicit_path_is_used() {
        let (_dir, path) = write_config("[report]\nlevel_column_width = 8\n");
        let (config, _) = load(Some(path.as_path())).unwrap();
        assert_eq!(config.level_column_width, 8);
    }
}
