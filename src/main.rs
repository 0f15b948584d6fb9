#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Palette id requested on the command line
static INITIAL_PALETTE: OnceLock<String> = OnceLock::new();

/// Get the palette the studio should open on (set from command line)
pub fn get_initial_palette() -> Option<&'static str> {
    INITIAL_PALETTE.get().map(String::as_str)
}

/// Vibe Coding Studio - pick a palette, set the mood, ship
#[derive(Parser, Debug)]
#[command(name = "vibestudio-desktop")]
#[command(about = "Vibe Coding Studio - palettes, prompts, and rituals for your coding session")]
struct Args {
    /// Palette to open on (aurora, sunrise, tidal, glitch)
    #[arg(short, long)]
    palette: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0, value_parser = parse_dimension)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0, value_parser = parse_dimension)]
    height: f64,
}

/// Parse a window dimension; must be a finite positive pixel count
fn parse_dimension(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|e| format!("invalid size '{}': {}", s, e))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("size must be a positive number of pixels, got '{}'", s))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(id) = args.palette {
        if vibestudio_core::palette_index(&id).is_none() {
            let known: Vec<_> = vibestudio_core::palette_ids().collect();
            tracing::warn!("Unknown palette '{}', expected one of {:?}; using default", id, known);
        }
        let _ = INITIAL_PALETTE.set(id);
    }

    tracing::info!(
        "Starting Vibe Coding Studio ({}x{}) on palette {:?}",
        args.width,
        args.height,
        get_initial_palette().unwrap_or("default")
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vibe Coding Studio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
