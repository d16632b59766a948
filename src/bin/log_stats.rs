// logbook - bin/log_stats.rs
//
// log-stats entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. One report run; any failure exits with code 1

use clap::{ArgGroup, Parser};
use logbook::app::log_stats::{self, StatsOptions};
use logbook::platform::config;
use logbook::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// Count log entries per severity level and optionally list one level.
///
/// Each input line must look like `<date> <time> <LEVEL> <message...>`;
/// shorter lines are ignored.
#[derive(Parser, Debug)]
#[command(name = "log-stats", version, about)]
#[command(group(ArgGroup::new("selection").args(["level", "export"]).multiple(true)))]
struct Cli {
    /// Log file to analyse.
    #[arg(value_name = "LOGFILE")]
    path: PathBuf,

    /// List the entries of this level after the table (case-insensitive).
    #[arg(value_name = "LEVEL")]
    level: Option<String>,

    /// Only keep entries whose message matches this regex (case-insensitive).
    /// Needs LEVEL or --export.
    #[arg(short = 'g', long = "grep", value_name = "REGEX", requires = "selection")]
    grep: Option<String>,

    /// Write the selected entries to FILE (.json for JSON, CSV otherwise).
    #[arg(short = 'e', long = "export", value_name = "FILE")]
    export: Option<PathBuf>,

    /// Read configuration from FILE instead of the platform config directory.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let (app_config, warnings) = match config::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = util::error::LogbookError::from(e);
            util::logging::init(cli.debug, None);
            tracing::error!(error = %err, "Failed to load configuration");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config problem; using default");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        path = %cli.path.display(),
        level = cli.level.as_deref().unwrap_or(""),
        "log-stats starting"
    );

    let options = StatsOptions {
        path: cli.path,
        level: cli.level,
        grep: cli.grep,
        export: cli.export,
        level_column_width: app_config.level_column_width,
    };

    let stdout = std::io::stdout();
    if let Err(e) = log_stats::run(&options, &mut stdout.lock()) {
        tracing::error!(error = %e, "log-stats failed");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
