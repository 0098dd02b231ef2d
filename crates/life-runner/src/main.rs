//! Terminal driver for the Game of Life engine.
//!
//! Owns everything the engine deliberately does not: frame pacing, shutdown,
//! and rendering. The universe itself stays passive and is only ever ticked
//! and read from here.

mod telemetry;

use anyhow::{Context, Result};
use life_core::RunnerConfig;
use life_world::Universe;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    telemetry::init_telemetry()?;

    info!("Starting life runner");
    info!(
        width = config.universe.width,
        height = config.universe.height,
        generations = config.generations,
        "configuration"
    );

    let mut universe = Universe::from_config(&config.universe)?;

    // An empty starting grid gets a glider so there is something to watch.
    if universe.population() == 0 {
        universe.stamp_glider(1, 1);
    }

    let mut frames = interval(Duration::from_millis(config.frame_interval_ms.max(1)));

    for _ in 0..config.generations {
        tokio::select! {
            _ = frames.tick() => {}
            _ = signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                break;
            }
        }

        universe.tick();

        if config.render {
            println!("{universe}");
        }

        if universe.generation() % 100 == 0 {
            info!(
                generation = universe.generation(),
                population = universe.population(),
                "progress"
            );
        }
    }

    info!(
        generation = universe.generation(),
        population = universe.population(),
        "Runner finished"
    );
    Ok(())
}

/// Load the runner configuration from the JSON file given as the first
/// argument, or fall back to defaults.
fn load_config() -> Result<RunnerConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config file {path}"))
        }
        None => Ok(RunnerConfig::default()),
    }
}
