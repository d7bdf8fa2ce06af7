#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Lightbot experience.

mod bootstrap;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lightbot_rendering::RenderingBackend;
use lightbot_rendering_macroquad::MacroquadBackend;

use self::{bootstrap::Level, config::Config};

/// Renders a Lightbot level as an isometric board.
#[derive(Debug, Parser)]
#[command(name = "lightbot", version, about)]
struct Args {
    /// Level file to load.
    #[arg(default_value = "board.txt")]
    level: PathBuf,
    /// TOML file with window and floor settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the board and floor statistics instead of opening a window.
    #[arg(long)]
    describe: bool,
    /// Report frame timings once per second.
    #[arg(long)]
    show_fps: bool,
    /// Synchronise presentation with the display refresh rate.
    #[arg(long)]
    vsync: bool,
}

/// Entry point for the Lightbot command-line interface.
fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.window.show_fps |= args.show_fps;
    config.window.vsync |= args.vsync;

    let level = Level::load(&args.level, &config)?;
    if args.describe {
        print!("{}", level.describe());
        return Ok(());
    }

    let backend = MacroquadBackend::new()
        .with_vsync(config.window.vsync)
        .with_show_fps(config.window.show_fps);
    let presentation = level.into_presentation(&config)?;
    backend.run(presentation, |_dt, input, scene| scene.apply_input(&input))
}
