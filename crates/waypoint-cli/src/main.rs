//! Waypoint CLI Application
//!
//! Command-line interface for tracking plans and their steps.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{Backend, PlanManagerBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        plan_dir,
        no_color,
        command,
    } = Args::parse();

    let backend = if plan_dir.is_some() {
        Backend::Files
    } else {
        Backend::Sqlite
    };

    let manager = PlanManagerBuilder::new()
        .with_backend(backend)
        .with_database_path(database_file)
        .with_plan_directory(plan_dir)
        .build()
        .context("Failed to initialize plan manager")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started with {backend:?} backend");

    Cli::new(manager, renderer).run(command)
}
