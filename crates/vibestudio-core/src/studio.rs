//! Per-session studio state.
//!
//! A [`Studio`] holds the two cells a view owns: the selected palette and
//! the prompt cursor. Both are catalog indices, so the struct is `Copy` and
//! never dangles.

use serde::Serialize;

use crate::catalog::{palette_index, PALETTES, PROMPTS, QUICK_LOOPS, RITUALS};
use crate::types::{Palette, Ritual};

/// Selection state for one studio view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Studio {
    selected: usize,
    prompt_cursor: usize,
}

impl Studio {
    /// Fresh session: first palette, first prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session starting on the palette with `id`.
    ///
    /// Unknown ids keep the default first palette.
    pub fn with_palette(id: &str) -> Self {
        let mut studio = Self::new();
        studio.select_palette(id);
        studio
    }

    /// Select the palette with `id`.
    ///
    /// Returns `false` and leaves the selection untouched when no palette
    /// has that id.
    pub fn select_palette(&mut self, id: &str) -> bool {
        match palette_index(id) {
            Some(index) => {
                if index != self.selected {
                    tracing::info!(from = self.current_palette().id, to = id, "Palette selected");
                }
                self.selected = index;
                true
            }
            None => {
                tracing::debug!(id, "Ignoring unknown palette id");
                false
            }
        }
    }

    pub fn current_palette(&self) -> &'static Palette {
        &PALETTES[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move to the next prompt, wrapping after the last. Returns the new prompt.
    pub fn advance_prompt(&mut self) -> &'static str {
        self.prompt_cursor = (self.prompt_cursor + 1) % PROMPTS.len();
        tracing::debug!(cursor = self.prompt_cursor, "Prompt advanced");
        self.current_prompt()
    }

    pub fn current_prompt(&self) -> &'static str {
        PROMPTS[self.prompt_cursor]
    }

    pub fn prompt_cursor(&self) -> usize {
        self.prompt_cursor
    }

    /// Palettes in catalog order, each flagged with whether it is selected.
    pub fn palette_entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        PALETTES
            .iter()
            .enumerate()
            .map(move |(index, palette)| PaletteEntry {
                palette,
                active: index == self.selected,
            })
    }

    pub fn rituals(&self) -> &'static [Ritual] {
        RITUALS
    }

    pub fn quick_loops(&self) -> &'static [&'static str] {
        QUICK_LOOPS
    }
}

/// One row of the palette list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub palette: &'static Palette,
    pub active: bool,
}

impl PaletteEntry {
    /// Badge text: "ON" for the selected palette, "SET" otherwise.
    pub fn badge(&self) -> &'static str {
        if self.active {
            "ON"
        } else {
            "SET"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_studio_starts_on_first_entries() {
        let studio = Studio::new();
        assert_eq!(studio.current_palette().id, "aurora");
        assert_eq!(studio.prompt_cursor(), 0);
        assert_eq!(studio.current_prompt(), PROMPTS[0]);
    }

    #[test]
    fn select_known_palette() {
        let mut studio = Studio::new();
        assert!(studio.select_palette("tidal"));
        assert_eq!(studio.current_palette().mood, "Flow state");
        assert_eq!(studio.selected_index(), 2);

        // Reselecting is accepted and changes nothing.
        assert!(studio.select_palette("tidal"));
        assert_eq!(studio.selected_index(), 2);
    }

    #[test]
    fn select_unknown_palette_is_noop() {
        let mut studio = Studio::new();
        studio.select_palette("sunrise");
        let before = studio;

        assert!(!studio.select_palette("nonexistent"));
        assert!(!studio.select_palette("SUNRISE"));
        assert_eq!(studio, before);
        assert_eq!(studio.current_palette().id, "sunrise");
    }

    #[test]
    fn selection_leaves_prompt_alone() {
        let mut studio = Studio::new();
        studio.advance_prompt();
        studio.advance_prompt();
        studio.select_palette("glitch");
        assert_eq!(studio.prompt_cursor(), 2);
    }

    #[test]
    fn advance_returns_new_prompt_and_wraps() {
        let mut studio = Studio::new();
        assert_eq!(studio.advance_prompt(), PROMPTS[1]);
        for _ in 0..3 {
            studio.advance_prompt();
        }
        assert_eq!(studio.prompt_cursor(), 4);
        assert_eq!(studio.advance_prompt(), PROMPTS[0]);
        assert_eq!(studio.prompt_cursor(), 0);
    }

    #[test]
    fn with_palette_falls_back_to_default() {
        assert_eq!(Studio::with_palette("glitch").current_palette().id, "glitch");
        assert_eq!(Studio::with_palette("nope"), Studio::new());
    }

    #[test]
    fn palette_entries_flag_selection() {
        let mut studio = Studio::new();
        studio.select_palette("sunrise");

        let entries: Vec<_> = studio.palette_entries().collect();
        assert_eq!(entries.len(), PALETTES.len());

        let badges: Vec<_> = entries.iter().map(PaletteEntry::badge).collect();
        assert_eq!(badges, vec!["SET", "ON", "SET", "SET"]);

        let ids: Vec<_> = entries.iter().map(|e| e.palette.id).collect();
        assert_eq!(ids, vec!["aurora", "sunrise", "tidal", "glitch"]);
    }

    #[test]
    fn catalog_projections_in_declared_order() {
        let studio = Studio::new();
        assert_eq!(studio.rituals()[0].title, "Breathing Loop");
        assert_eq!(studio.rituals()[2].steps.len(), 3);
        assert_eq!(
            studio.quick_loops()[0],
            "Drop a TODO in the idea queue before it fades."
        );
    }
}
