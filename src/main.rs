//! Orbit Vectors entry point
//!
//! Parses the command line, loads settings and hands over to the window loop.

use std::path::PathBuf;

use clap::Parser;

use orbit_vectors::{AppError, Scenario, Settings, app};

#[derive(Parser, Debug)]
#[command(version, about = "Live velocity and acceleration vectors for orbital and circular motion")]
struct Args {
    /// Scene to show: decay, rotation or circular
    #[arg(short, long, value_parser = parse_scenario)]
    scenario: Option<Scenario>,

    /// Settings JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in fullscreen
    #[arg(short, long)]
    fullscreen: bool,

    /// Write the effective settings to this file before starting
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn parse_scenario(s: &str) -> Result<Scenario, String> {
    Scenario::from_str(s).ok_or_else(|| format!("unknown scenario '{}'", s))
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref());
    if let Some(scenario) = args.scenario {
        settings.scenario = scenario;
    }
    if args.fullscreen {
        settings.start_fullscreen = true;
    }

    if let Some(path) = &args.write_config {
        settings.save(path)?;
        log::info!("Settings written to {}", path.display());
    }

    log::info!("Orbit Vectors starting: {}", settings.scenario.title());
    app::run(settings)
}
