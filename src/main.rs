//! Facehash - deterministic SVG avatars from identity strings.

#![allow(dead_code)]

mod avatar;
mod cli;
mod config;
mod core;
mod embed;
mod logger;
mod seed;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Config, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(Config::load(cli)?);

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Serve { .. } => cli::serve::serve(&config),
    }
}
