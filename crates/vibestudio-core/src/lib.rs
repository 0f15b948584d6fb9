//! Vibe Coding Studio Core Library
//!
//! Palette presets, ritual checklists, and prompt cycling for the studio view.
//!
//! ## Overview
//!
//! The studio lets a user pick one of a fixed set of color palettes, renders a
//! layered gradient derived from that palette, and cycles through a list of
//! coding prompts. Everything here is static data plus two per-session cells
//! (selected palette, prompt cursor); there is no I/O.
//!
//! ## Quick Start
//!
//! ```
//! use vibestudio_core::{derive_style, Studio};
//!
//! let mut studio = Studio::new();
//! studio.select_palette("tidal");
//! assert_eq!(studio.current_palette().mood, "Flow state");
//!
//! let style = derive_style(studio.current_palette());
//! assert_eq!(style.box_shadow, "0 50px 140px -60px #38bdf8aa");
//!
//! studio.advance_prompt();
//! println!("{}", studio.current_prompt());
//! ```

pub mod catalog;
pub mod color;
pub mod error;
pub mod studio;
pub mod style;
pub mod types;

// Re-exports
pub use catalog::{find_palette, palette_ids, palette_index, PALETTES, PROMPTS, QUICK_LOOPS, RITUALS};
pub use color::HexColor;
pub use error::{StudioError, StudioResult};
pub use studio::{PaletteEntry, Studio};
pub use style::{derive_style, StyleDescriptor, StyleMemo};
pub use types::*;
