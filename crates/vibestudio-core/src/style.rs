//! Gradient style derivation.
//!
//! A palette becomes a CSS background made of three layers plus a colored
//! drop shadow:
//!
//! ```text
//! radial-gradient(circle at 20% 20%, <highlight>33 0%, transparent 55%),
//! radial-gradient(circle at 80% 0%, <end>4d 0%, transparent 60%),
//! linear-gradient(135deg, <base> 0%, <mid> 55%, <end> 100%)
//!
//! box-shadow: 0 50px 140px -60px <end>aa
//! ```
//!
//! The output strings are compared verbatim by visual regression tests, so
//! the layer order, stops, and alpha suffixes are fixed.

use serde::Serialize;

use crate::types::Palette;

/// Alpha for the highlight glow (~20%)
pub const HIGHLIGHT_ALPHA: u8 = 0x33;
/// Alpha for the end-color glow (~30%)
pub const GLOW_ALPHA: u8 = 0x4d;
/// Alpha for the drop shadow
pub const SHADOW_ALPHA: u8 = 0xaa;

/// CSS properties for the hero gradient layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub background: String,
    pub box_shadow: String,
}

impl StyleDescriptor {
    /// White grain laid over every palette. Independent of the selection.
    pub const GRAIN_OVERLAY: &'static str = "radial-gradient(circle at 25% 25%, rgba(255,255,255,0.3) 0, transparent 45%), radial-gradient(circle at 75% 65%, rgba(255,255,255,0.25) 0, transparent 55%)";

    /// Render as an inline `style` attribute value.
    pub fn to_inline_css(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background, self.box_shadow
        )
    }

    /// Inline style for the grain layer.
    pub fn grain_inline_css() -> String {
        format!("background-image: {};", Self::GRAIN_OVERLAY)
    }
}

/// Build the hero style for a palette.
pub fn derive_style(palette: &Palette) -> StyleDescriptor {
    let gradient = &palette.gradient;

    let highlight_glow = format!(
        "radial-gradient(circle at 20% 20%, {} 0%, transparent 55%)",
        palette.highlight.with_alpha(HIGHLIGHT_ALPHA)
    );
    let end_glow = format!(
        "radial-gradient(circle at 80% 0%, {} 0%, transparent 60%)",
        gradient.end.with_alpha(GLOW_ALPHA)
    );
    let base = format!(
        "linear-gradient(135deg, {} 0%, {} 55%, {} 100%)",
        gradient.base, gradient.mid, gradient.end
    );

    StyleDescriptor {
        background: format!("{highlight_glow}, {end_glow}, {base}"),
        box_shadow: format!("0 50px 140px -60px {}", gradient.end.with_alpha(SHADOW_ALPHA)),
    }
}

/// Single-slot cache for [`derive_style`], keyed on palette id.
///
/// Reactive hosts get this from their framework's memo; this is for hosts
/// that re-render by hand.
#[derive(Debug, Default)]
pub struct StyleMemo {
    cached: Option<(&'static str, StyleDescriptor)>,
    computations: u64,
}

impl StyleMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for `palette`, recomputed only when the palette id changes.
    pub fn get(&mut self, palette: &Palette) -> &StyleDescriptor {
        if self
            .cached
            .as_ref()
            .is_some_and(|(id, _)| *id != palette.id)
        {
            self.cached = None;
        }

        let computations = &mut self.computations;
        let (_, style) = self.cached.get_or_insert_with(|| {
            *computations += 1;
            tracing::trace!(palette = palette.id, "Deriving gradient style");
            (palette.id, derive_style(palette))
        });
        style
    }

    /// How many times the style has been derived.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_palette, PALETTES};

    #[test]
    fn aurora_style_matches_reference() {
        let aurora = find_palette("aurora").unwrap();
        let style = derive_style(aurora);

        assert_eq!(
            style.background,
            "radial-gradient(circle at 20% 20%, #60ffe233 0%, transparent 55%), \
             radial-gradient(circle at 80% 0%, #fb71854d 0%, transparent 60%), \
             linear-gradient(135deg, #1e1b4b 0%, #6d28d9 55%, #fb7185 100%)"
        );
        assert_eq!(style.box_shadow, "0 50px 140px -60px #fb7185aa");
    }

    #[test]
    fn glitch_style_uses_its_own_colors() {
        let style = derive_style(find_palette("glitch").unwrap());
        assert!(style.background.starts_with("radial-gradient(circle at 20% 20%, #a3ff0033 0%"));
        assert!(style
            .background
            .ends_with("linear-gradient(135deg, #240046 0%, #9d174d 55%, #f97316 100%)"));
        assert_eq!(style.box_shadow, "0 50px 140px -60px #f97316aa");
    }

    #[test]
    fn every_palette_gets_a_distinct_style() {
        let mut seen = std::collections::HashSet::new();
        for palette in PALETTES {
            assert!(seen.insert(derive_style(palette)), "{}", palette.id);
        }
    }

    #[test]
    fn inline_css_joins_properties() {
        let style = StyleDescriptor {
            background: "red".to_string(),
            box_shadow: "none".to_string(),
        };
        assert_eq!(style.to_inline_css(), "background: red; box-shadow: none;");
        assert!(StyleDescriptor::grain_inline_css().starts_with("background-image: radial-gradient"));
    }

    #[test]
    fn serializes_with_css_property_names() {
        let style = derive_style(&PALETTES[0]);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["boxShadow"], "0 50px 140px -60px #fb7185aa");
        assert!(json["background"].as_str().unwrap().contains("135deg"));
    }

    #[test]
    fn memo_recomputes_only_on_palette_change() {
        let mut memo = StyleMemo::new();
        let aurora = &PALETTES[0];
        let tidal = find_palette("tidal").unwrap();

        let first = memo.get(aurora).clone();
        let again = memo.get(aurora).clone();
        assert_eq!(first, again);
        assert_eq!(memo.computations(), 1);

        assert_eq!(memo.get(tidal), &derive_style(tidal));
        assert_eq!(memo.computations(), 2);

        memo.get(tidal);
        assert_eq!(memo.computations(), 2);

        memo.get(aurora);
        assert_eq!(memo.computations(), 3);
    }
}
