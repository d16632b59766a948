// logbook - bin/contact_bot.rs
//
// contact-bot entry point: config, logging, then the blocking REPL on
// stdin/stdout. Contacts live only for the session.

use clap::Parser;
use logbook::app::repl::Repl;
use logbook::platform::config;
use logbook::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive contact book.
///
/// Commands: hello, add <name> <phone>, change <name> <phone>,
/// phone <name>, all, close | exit.
#[derive(Parser, Debug)]
#[command(name = "contact-bot", version, about)]
struct Cli {
    /// Read configuration from FILE instead of the platform config directory.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

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

    tracing::info!(version = util::constants::APP_VERSION, "contact-bot starting");

    let mut repl = Repl::new(app_config.prompt);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = repl.run(stdin.lock(), &mut stdout.lock()) {
        let err = util::error::LogbookError::Io {
            operation: "contact-bot session",
            source: e,
        };
        tracing::error!(error = %err, "Session aborted");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    tracing::info!(contacts = repl.registry().len(), "contact-bot finished");
    ExitCode::SUCCESS
}
