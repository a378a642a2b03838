//! ARLandmarks command-line interface.
//!
//! Drives the placement core without a device: `simulate` walks a
//! synthetic observer through the landmark set and logs every anchor
//! request the renderer would receive; `config` prints the resolved
//! configuration.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use arlandmarks::config::AppConfig;

#[derive(Parser)]
#[command(name = "arlandmarks", version, about = "Geo-anchored AR landmark placement")]
struct Cli {
    /// Alternate config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default log filter (RUST_LOG overrides).
    #[arg(long, global = true, default_value = "info")]
    log_filter: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulated AR session with a synthetic observer walk.
    Simulate(commands::simulate::SimulateArgs),
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    arlandmarks::log::init_tracing(&cli.log_filter);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Simulate(args) => commands::simulate::run(config, args).await,
        Command::Config => commands::config::run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig, arlandmarks::config::ConfigError> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}
