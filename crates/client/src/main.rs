//! Arena terminal client.
//!
//! Composition root: reads configuration, sets up logging, loads content
//! from the data directory and hands everything to the interactive [`app::App`].
//!
//! ```bash
//! cargo run -p arena-cli -- --data-dir data --seed 42
//! ```

mod app;
mod config;
mod logging;
mod presentation;

use std::io;

use anyhow::{Context, Result};
use arena_content::ContentFactory;
use arena_core::{Battle, PcgRng};
use clap::Parser;

use crate::app::{App, Content};
use crate::config::{Args, CliConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = CliConfig::from_env().with_args(args);

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = ContentFactory::new(&config.data_dir);
    let equipment = factory
        .load_equipment()
        .context("Failed to load equipment catalog")?;
    let classes = factory
        .load_classes()
        .context("Failed to load unit classes")?;
    let arena_config = factory
        .load_config()
        .context("Failed to load arena config")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(data_dir = %config.data_dir.display(), seed, "starting arena");

    let battle = Battle::new(arena_config, seed);
    let content = Content { equipment, classes };

    let stdin = io::stdin();
    App::new(content, battle, Box::new(PcgRng), stdin.lock(), io::stdout()).run()?;

    tracing::info!("arena closed");
    Ok(())
}
