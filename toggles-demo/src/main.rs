mod app;
mod error;
mod paths;
mod scene;
mod session;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::Playground;
use crate::error::DemoError;
use crate::scene::Scene;

/// Checkbox and switch playground.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Scene file to load. Uses a built-in scene when omitted.
    scene: Option<PathBuf>,

    /// Print the rendered markup and exit.
    #[arg(long)]
    html: bool,

    /// Log level written to the log file.
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

/// Start the file logger. Logging is skipped when no cache directory exists.
fn init_logging(level: LevelFilter) -> Result<(), DemoError> {
    paths::rotate_logs();
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&log_path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    info!("[demo] logging to {}", log_path.display());
    Ok(())
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    init_logging(cli.log_level)?;

    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::builtin()?,
    };
    let playground = Playground::new(&scene)?;

    if cli.html {
        print!("{}", playground.html());
        return Ok(());
    }

    session::run(playground).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
