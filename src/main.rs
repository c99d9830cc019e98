use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use medtrack::config::Config;
use medtrack::logging::init_tracing;
use medtrack::ui::{self, Route};

#[derive(Parser)]
#[command(name = "medtrack")]
#[command(about = "Terminal client for the medical equipment inventory service")]
#[command(version)]
struct Cli {
    /// Base URL of the inventory API (overrides MEDTRACK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen shown at startup
    #[arg(long, value_enum, default_value_t = StartScreen::Dashboard)]
    start: StartScreen,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartScreen {
    Dashboard,
    Devices,
    New,
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Dashboard => Route::Dashboard,
            StartScreen::Devices => Route::Devices,
            StartScreen::New => Route::NewDevice,
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, medtrack::config::ConfigError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.with_overrides(Config::env_base_url(), cli.api_url.clone())
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing();
    tracing::info!(base_url = %config.api.base_url, "configuration loaded");

    if let Err(e) = ui::run(&config, cli.start.into()) {
        tracing::error!(error = %e, "terminal client failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
