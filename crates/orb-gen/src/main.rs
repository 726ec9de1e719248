//! Command-line icosphere generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orb-gen -- --order 5 --output sphere.json` to write a mesh,
//! add `--watch` to regenerate whenever the config file changes.

mod error;
mod export;
mod generate;
mod stats;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use orb_config::{CliArgs, Config, ConfigError};
use tracing::{error, info, warn};

use crate::error::GenError;

const WATCH_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = resolve_config_dir(&args);

    // Load or create config, then apply CLI overrides
    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orb_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = generate::run(&config) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if args.watch
        && let Err(e) = watch(&config_dir, file_config, &args)
    {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn resolve_config_dir(args: &CliArgs) -> PathBuf {
    args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("orb"))
            .unwrap_or_else(|| PathBuf::from(".orb"))
    })
}

/// Poll the config file and regenerate whenever its contents change.
///
/// CLI overrides keep precedence over edited values. Generation failures and
/// half-written config files are logged and skipped; a config file that can no
/// longer be read ends the loop.
fn watch(config_dir: &Path, mut file_config: Config, args: &CliArgs) -> Result<(), GenError> {
    info!(
        "Watching {} for changes",
        Config::path_in(config_dir).display()
    );

    loop {
        std::thread::sleep(WATCH_INTERVAL);

        match file_config.reload(config_dir) {
            Ok(Some(changed)) => file_config = changed,
            Ok(None) => continue,
            Err(e @ ConfigError::ParseError { .. }) => {
                warn!("Ignoring config edit: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        let mut config = file_config.clone();
        config.apply_cli_overrides(args);
        if let Err(e) = generate::run(&config) {
            warn!("Regeneration failed: {e}");
        }
    }
}
