//! Command-line configuration.
//!
//! # Invariants
//! - `Config::log_dir` is always absolute; relative input is resolved against
//!   the current working directory.

use clap::Parser;
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};

/// Taskpad - an interactive in-memory task list
#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Do not wait for Enter between menu actions
    #[arg(long)]
    pub no_pause: bool,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_dir: PathBuf,
    pub pause: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let log_dir = match cli.log_dir {
            Some(dir) => absolutize(&dir)?,
            None => default_log_dir(),
        };

        Ok(Self {
            log_level: cli
                .log_level
                .unwrap_or_else(|| taskpad_core::default_log_level().to_string()),
            log_dir,
            pause: !cli.no_pause,
        })
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("taskpad").join("logs")
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().wrap_err("failed to resolve current directory")?;
    Ok(cwd.join(dir))
}
