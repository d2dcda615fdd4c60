//! Healthy Catch entry point
//!
//! Native headless demo: plays one round on simulated time with the autopilot
//! steering, then prints the results as JSON.
//!
//! Usage: `healthy-catch [--seed N] [--config config.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use healthy_catch::GameConfig;
use healthy_catch::sim::{Catalog, Phase, Session, autopilot};

#[derive(Parser, Debug)]
#[command(name = "healthy-catch")]
#[command(about = "Play one headless Healthy Catch round and print the results as JSON")]
struct Args {
    /// Seed for the spawn RNG
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// JSON round config; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))?;
    GameConfig::from_json(&json).map_err(|err| format!("{}: {err}", path.display()))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Healthy Catch (headless) starting with seed {}", args.seed);

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let seed = args.seed;

    let mut session = match Session::new(config, Catalog::standard(), seed) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    session.start();
    let step = session.config().tick_interval_ms;
    let mut now = 0;
    while session.phase() == Phase::Running {
        if let Some(direction) = autopilot::choose_move(session.state(), session.config()) {
            session.move_lane(direction);
        }
        now += step;
        session.tick(now);
    }

    let report = serde_json::json!({
        "seed": session.seed(),
        "score": session.state().score,
        "summary": session.summary(),
        "caught": session
            .state()
            .history
            .iter()
            .map(|r| r.food.name.as_str())
            .collect::<Vec<_>>(),
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to encode report: {}", err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
