//! CLI configuration from the environment and command-line flags.
use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Turn-based arena in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "arena")]
#[command(about = "Turn-based two-unit arena", long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory holding equipment.json, classes.ron and config.toml
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Battle seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to arena.log in this directory instead of stderr
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Resolved client settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            seed: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: `data`)
    /// - `ARENA_SEED` - Battle seed (default: random)
    /// - `ARENA_LOG` - Log directory (default: log to stderr)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARENA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("ARENA_SEED");
        config.log_dir = env::var("ARENA_LOG").ok().map(PathBuf::from);

        config
    }

    /// Command-line flags win over the environment.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(dir) = args.data_dir {
            self.data_dir = dir;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.log_dir.is_some() {
            self.log_dir = args.log_dir;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
