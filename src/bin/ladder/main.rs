//! Ladder CLI
//!
//! Prints the cheapest purchase plan for a target.
//!
//! Use `-t` to choose the target
//! Use `-f` to plan a YAML catalog fixture instead of the built-in event
//! Use `--format table` for a tabular breakdown

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;

use ladder::{Simulator, fixtures::load_simulator};

use crate::config::{Config, OutputFormat};

mod config;
mod logging;

fn main() -> Result<()> {
    let config = Config::parse();

    logging::init_subscriber(&config.logging)?;

    let simulator = match config.fixture.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading catalog fixture");
            load_simulator(path)?
        }
        None => Simulator::reference(),
    };

    let start = Instant::now();
    let report = simulator.report(config.target)?;

    info!(elapsed = %start.elapsed().human(Truncate::Nano), "plan computed");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.format {
        OutputFormat::Text => write!(handle, "{report}")?,
        OutputFormat::Table => report.write_table(&mut handle)?,
    }

    Ok(())
}
