//! Static catalogs: palettes, rituals, prompts, and quick loops.
//!
//! Every table is a `const` and is checked by [`find_defect`] during
//! compilation, so a duplicate palette id or an empty ritual never builds.

use crate::color::HexColor;
use crate::types::{Gradient, Palette, Ritual};

pub const PALETTES: &[Palette] = &[
    Palette {
        id: "aurora",
        name: "Aurora Bloom",
        description: "Ambient purples with neon sparks for when the night feels endless and ideas won\u{2019}t sit still.",
        gradient: Gradient {
            base: HexColor::new("#1e1b4b"),
            mid: HexColor::new("#6d28d9"),
            end: HexColor::new("#fb7185"),
        },
        highlight: HexColor::new("#60ffe2"),
        mood: "Nocturnal focus",
    },
    Palette {
        id: "sunrise",
        name: "Sunrise Lo-Fi",
        description: "Soft ambers and dusty oranges that feel like brewing coffee while the city yawns awake.",
        gradient: Gradient {
            base: HexColor::new("#422006"),
            mid: HexColor::new("#f97316"),
            end: HexColor::new("#facc15"),
        },
        highlight: HexColor::new("#fff0b3"),
        mood: "Slow momentum",
    },
    Palette {
        id: "tidal",
        name: "Tidal Bloom",
        description: "Cerulean waves with coral pops\u{2014}perfect for flow states and breezy shipping energy.",
        gradient: Gradient {
            base: HexColor::new("#0f172a"),
            mid: HexColor::new("#2563eb"),
            end: HexColor::new("#38bdf8"),
        },
        highlight: HexColor::new("#5eead4"),
        mood: "Flow state",
    },
    Palette {
        id: "glitch",
        name: "Glitch Hop",
        description: "Electric magentas and acid greens that vibrate like a live synth session.",
        gradient: Gradient {
            base: HexColor::new("#240046"),
            mid: HexColor::new("#9d174d"),
            end: HexColor::new("#f97316"),
        },
        highlight: HexColor::new("#a3ff00"),
        mood: "High energy",
    },
];

pub const RITUALS: &[Ritual] = &[
    Ritual {
        title: "Breathing Loop",
        steps: &[
            "Inhale for 4 counts",
            "Hold for 4",
            "Exhale for 6",
            "Write the first idea that shows up",
        ],
    },
    Ritual {
        title: "Palette Reset",
        steps: &[
            "Change the vibe palette",
            "Refactor one component",
            "Commit a micro improvement",
            "Drop a celebratory emoji",
        ],
    },
    Ritual {
        title: "Sensory Sync",
        steps: &[
            "Touch something textured",
            "Change playlists",
            "Rename a variable to match the new vibe",
        ],
    },
];

pub const PROMPTS: &[&str] = &[
    "Build a widget that reflects the palette mood in real-time.",
    "Refine a component to be as smooth as the current gradient.",
    "Sketch a micro-interaction inspired by the soundtrack in your head.",
    "Automate the most boring thing you touched today.",
    "Ship a UI polish that nobody asked for but everyone will feel.",
];

pub const QUICK_LOOPS: &[&str] = &[
    "Drop a TODO in the idea queue before it fades.",
    "Run format/lint so future-you can breathe.",
    "Capture a screenshot or Loom of what just clicked.",
    "Pair with a friend or rubber duck for 10 focused minutes.",
];

const _: () = match find_defect(PALETTES, RITUALS, PROMPTS, QUICK_LOOPS) {
    None => {}
    Some(CatalogDefect::NoPalettes) => panic!("palette catalog is empty"),
    Some(CatalogDefect::DuplicatePaletteId) => panic!("palette ids must be unique"),
    Some(CatalogDefect::EmptyRitual) => panic!("every ritual needs at least one step"),
    Some(CatalogDefect::NoPrompts) => panic!("prompt catalog is empty"),
    Some(CatalogDefect::NoQuickLoops) => panic!("quick-loop catalog is empty"),
};

/// A structural problem in a set of catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDefect {
    NoPalettes,
    DuplicatePaletteId,
    EmptyRitual,
    NoPrompts,
    NoQuickLoops,
}

/// Check catalog tables for structural problems.
///
/// Runs in `const` context against the built-in tables; returns the first
/// defect found.
pub const fn find_defect(
    palettes: &[Palette],
    rituals: &[Ritual],
    prompts: &[&str],
    quick_loops: &[&str],
) -> Option<CatalogDefect> {
    if palettes.is_empty() {
        return Some(CatalogDefect::NoPalettes);
    }
    if prompts.is_empty() {
        return Some(CatalogDefect::NoPrompts);
    }
    if quick_loops.is_empty() {
        return Some(CatalogDefect::NoQuickLoops);
    }

    let mut i = 0;
    while i < palettes.len() {
        let mut j = i + 1;
        while j < palettes.len() {
            if str_eq(palettes[i].id, palettes[j].id) {
                return Some(CatalogDefect::DuplicatePaletteId);
            }
            j += 1;
        }
        i += 1;
    }

    let mut r = 0;
    while r < rituals.len() {
        if rituals[r].steps.is_empty() {
            return Some(CatalogDefect::EmptyRitual);
        }
        r += 1;
    }

    None
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Position of the palette with this id, if any.
pub fn palette_index(id: &str) -> Option<usize> {
    PALETTES.iter().position(|palette| palette.id == id)
}

/// Look up a palette by id.
pub fn find_palette(id: &str) -> Option<&'static Palette> {
    palette_index(id).map(|index| &PALETTES[index])
}

/// Palette ids in catalog order.
pub fn palette_ids() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|palette| palette.id)
}
