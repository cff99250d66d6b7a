//! # Steel Sim
//!
//! Grows glow lichen or sculk veins in a generated cave and prints what
//! happened.
//!
//! Usage: `steel-sim [config path]`. The config defaults to
//! `sim_config.json5` in the working directory and is created on first run.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::{DEFAULT_CONFIG_PATH, SimConfig};

mod config;
mod logger;
mod simulation;

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = SimConfig::load_or_create(&path)?;
    tracing::info!(
        "Growing {} in a cave of radius {} for {} ticks (seed {})",
        config.material,
        config.radius,
        config.ticks,
        config.seed
    );

    let start = Instant::now();
    let report = simulation::run(&config);
    tracing::info!("Done in {:?}: {report}", start.elapsed());
    Ok(())
}
