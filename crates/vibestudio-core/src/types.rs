//! Core types for Vibe Coding Studio

use serde::Serialize;

use crate::color::HexColor;

/// The three stops of a palette's diagonal base gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub base: HexColor,
    pub mid: HexColor,
    pub end: HexColor,
}

/// A named color preset that tunes the hero gradient and mood tag.
///
/// Palettes only exist as entries of [`crate::catalog::PALETTES`]; the
/// catalog guarantees their ids are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Stable key used by the select-palette action
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
    /// Accent used by the top-left radial glow
    pub highlight: HexColor,
    /// Short label shown in the mood tag
    pub mood: &'static str,
}

/// A named checklist of short steps, shown for reference only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ritual {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}
