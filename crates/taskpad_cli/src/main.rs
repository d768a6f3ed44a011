//! Taskpad interactive entry point.
//!
//! # Responsibility
//! - Resolve configuration, bring up logging, then hand one service instance
//!   to the menu for the whole session.

use clap::Parser;
use eyre::{eyre, Result, WrapErr};
use log::info;
use std::io;
use taskpad_core::{init_logging, InMemoryTaskRepository, TaskService};

mod config;
mod menu;

use config::{Cli, Config};
use menu::Menu;

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    init_logging(&config.log_level, &config.log_dir)
        .map_err(|err| eyre!("failed to initialize logging: {err}"))?;
    info!(
        "event=menu_start module=cli status=ok core_version={} pause={}",
        taskpad_core::core_version(),
        config.pause
    );

    let mut service = TaskService::new(InMemoryTaskRepository::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut service, stdin.lock(), stdout.lock(), config.pause)
        .run()
        .wrap_err("menu session failed")?;

    Ok(())
}
