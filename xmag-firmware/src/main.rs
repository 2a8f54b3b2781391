//! X-Mag - Image Magnifier for the MZ_APO board
//!
//! Shows a title menu on the LCD, then a magnified view of a source image.
//! The blue and green knobs pan, the red knob sets the zoom, and the LED
//! line shows how far in the view is zoomed.

mod animation;
mod asset;
mod config;
#[cfg(test)]
#[path = "../config_check.rs"]
mod config_check;
mod controller;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use xmag_core::indicator::StartupAnimation;
use xmag_display::{Pixel, Raster};
use xmag_hal_mzapo::{MzApoBoard, SerializeLock, StdDelay};

use crate::animation::play_startup;
use crate::asset::load_source;
use crate::config::load_config;
use crate::controller::Magnifier;
use crate::error::StartupError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Knob-driven image magnifier for the MZ_APO board")]
struct Args {
    /// Configuration file (defaults to the built-in xmag.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the LED sweep at startup
    #[arg(long)]
    no_animation: bool,

    /// Exit instead of waiting when another program holds the board
    #[arg(long)]
    no_wait: bool,

    /// Override the board lock file
    #[arg(long)]
    lock_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            info!("X-Mag finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), StartupError> {
    info!("X-Mag starting");

    let mut config = load_config(args.config.as_deref())?;
    if args.no_animation {
        config.core.animation.enabled = false;
    }
    if args.no_wait {
        config.lock.wait = false;
    }
    if let Some(path) = &args.lock_file {
        config.lock.path = path.clone();
    }

    // Held until run returns, on success or error
    let _lock = SerializeLock::acquire(&config.lock.path, config.lock.wait)?;

    let display = config.core.display;
    let frame = Raster::new(display.width, display.height, Pixel::BLACK)?;
    let source = load_source(&config.asset, &display)?;

    let mut board = MzApoBoard::open()?;
    let mut delay = StdDelay;

    play_startup(
        &mut board,
        &mut delay,
        StartupAnimation::from_config(&config.core.animation, config.core.indicator.led_count),
    );

    board.lcd.init_hx8357(&mut delay);

    let mut app = Magnifier::new(board, delay, config.core, source, frame);
    app.run();
    app.shutdown();

    Ok(())
}
