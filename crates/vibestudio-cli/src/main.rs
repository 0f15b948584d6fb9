//! Vibe Coding Studio CLI
//!
//! Thin wrapper around vibestudio-core for scripting and inspection.
//!
//! ## Usage
//!
//! ```bash
//! # List palettes, marking the active one
//! vibestudio palettes
//! vibestudio palettes --select tidal
//!
//! # Print the derived gradient style for a palette
//! vibestudio style glitch
//! vibestudio --json style
//!
//! # Print the prompt after k shuffles
//! vibestudio prompts --advance 3
//!
//! # Print rituals and quick loops
//! vibestudio rituals
//! vibestudio loops
//!
//! # Check a color and add an alpha channel
//! vibestudio color "#38bdf8" --alpha 4d
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use vibestudio_core::{
    find_palette, HexColor, Studio, StudioError, StyleMemo, PALETTES, PROMPTS,
};

/// Vibe Coding Studio - palettes, prompts, and rituals
#[derive(Parser)]
#[command(name = "vibestudio")]
#[command(version = "0.1.0")]
#[command(about = "Vibe Coding Studio - palettes, prompts, and rituals")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List palettes in catalog order
    Palettes {
        /// Select this palette before listing (unknown ids are ignored)
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Print the gradient style derived from a palette
    Style {
        /// Palette id (default: first palette)
        id: Option<String>,
    },

    /// Print the prompt after a number of shuffles
    Prompts {
        /// Number of shuffles from a fresh session
        #[arg(short, long, default_value_t = 0)]
        advance: usize,
    },

    /// Print the ritual checklists
    Rituals,

    /// Print the quick loops
    Loops,

    /// Validate a #rrggbb color
    Color {
        /// Color text, e.g. "#38bdf8"
        value: String,

        /// Two-digit hex alpha to append, e.g. 4d
        #[arg(short, long, value_parser = parse_alpha)]
        alpha: Option<u8>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a two-digit hex alpha channel
fn parse_alpha(s: &str) -> Result<u8, String> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("alpha must be two hex digits, got '{}'", s));
    }
    u8::from_str_radix(s, 16).map_err(|e| format!("invalid alpha '{}': {}", s, e))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(StudioError::from)?;
    println!("{}", text);
    Ok(())
}

#[derive(Serialize)]
struct PromptReport {
    cursor: usize,
    total: usize,
    prompt: &'static str,
}

#[derive(Serialize)]
struct ColorReport {
    color: HexColor,
    rgb: (u8, u8, u8),
    #[serde(skip_serializing_if = "Option::is_none")]
    with_alpha: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Palettes { select } => {
            let mut studio = Studio::new();
            if let Some(id) = select {
                if !studio.select_palette(&id) {
                    tracing::warn!("Unknown palette '{}', keeping {}", id, studio.current_palette().id);
                }
            }

            let entries: Vec<_> = studio.palette_entries().collect();
            if cli.json {
                return print_json(&entries);
            }

            println!("Palettes ({}):", entries.len());
            for entry in entries {
                let palette = entry.palette;
                let marker = if entry.active { "*" } else { " " };
                println!();
                println!("{} {} [{}]", marker, palette.name, entry.badge());
                println!("    ID: {}", palette.id);
                println!("    Mood: {}", palette.mood);
                println!(
                    "    Colors: {} / {} / {} (highlight {})",
                    palette.gradient.base, palette.gradient.mid, palette.gradient.end, palette.highlight
                );
                println!("    {}", palette.description);
            }
        }

        Commands::Style { id } => {
            let palette = match id {
                Some(id) => find_palette(&id).ok_or(StudioError::UnknownPalette(id))?,
                None => &PALETTES[0],
            };

            let mut memo = StyleMemo::new();
            let style = memo.get(palette);
            if cli.json {
                return print_json(style);
            }

            println!("Palette: {}", palette.id);
            println!("background: {};", style.background);
            println!("box-shadow: {};", style.box_shadow);
        }

        Commands::Prompts { advance } => {
            let mut studio = Studio::new();
            for _ in 0..advance % PROMPTS.len() {
                studio.advance_prompt();
            }

            if cli.json {
                return print_json(&PromptReport {
                    cursor: studio.prompt_cursor(),
                    total: PROMPTS.len(),
                    prompt: studio.current_prompt(),
                });
            }

            println!("Prompt {}/{}:", studio.prompt_cursor() + 1, PROMPTS.len());
            println!("  {}", studio.current_prompt());
        }

        Commands::Rituals => {
            let rituals = Studio::new().rituals();
            if cli.json {
                return print_json(&rituals);
            }

            for ritual in rituals {
                println!("{}", ritual.title);
                for step in ritual.steps {
                    println!("  - {}", step);
                }
            }
        }

        Commands::Loops => {
            let loops = Studio::new().quick_loops();
            if cli.json {
                return print_json(&loops);
            }

            for tip in loops {
                println!("- {}", tip);
            }
        }

        Commands::Color { value, alpha } => {
            let color = HexColor::parse(&value)?;
            let report = ColorReport {
                color,
                rgb: color.rgb(),
                with_alpha: alpha.map(|a| color.with_alpha(a)),
            };
            if cli.json {
                return print_json(&report);
            }

            println!("Color: {}", report.color);
            println!("RGB: {} {} {}", report.rgb.0, report.rgb.1, report.rgb.2);
            if let Some(with_alpha) = report.with_alpha {
                println!("With alpha: {}", with_alpha);
            }
        }
    }

    Ok(())
}
