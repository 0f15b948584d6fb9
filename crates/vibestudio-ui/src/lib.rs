//! Vibe Coding Studio UI Components
//!
//! Dioxus components for the studio view: palette cards, the mood tag, the
//! prompt loop card, quick loops, and ritual checklists.
//!
//! ## Design Notes
//!
//! - Dark slate canvas, white hairline borders at low opacity
//! - Pill-shaped controls with uppercase tracked labels
//! - All color comes from the selected palette's gradient layer; components
//!   themselves stay neutral so any palette reads well behind them
//!
//! Class names refer to the global stylesheet injected by the desktop app.

pub mod components;

pub use components::*;
