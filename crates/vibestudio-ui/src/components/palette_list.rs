//! Palette List Component
//!
//! Vertical list of palette cards. The selected palette shows an "ON" badge,
//! the others "SET".

use dioxus::prelude::*;
use vibestudio_core::PaletteEntry;

use super::{Button, ButtonVariant};

/// Properties for the PaletteList component
#[derive(Clone, PartialEq, Props)]
pub struct PaletteListProps {
    /// Palettes in catalog order with their active flags
    pub entries: Vec<PaletteEntry>,
    /// Handler called with the id of the clicked palette
    pub on_select: EventHandler<&'static str>,
}

/// Displays every palette as a selectable card
///
/// # Example
///
/// ```rust,ignore
/// let mut studio = use_signal(Studio::new);
///
/// rsx! {
///     PaletteList {
///         entries: studio.read().palette_entries().collect::<Vec<_>>(),
///         on_select: move |id| { studio.write().select_palette(id); }
///     }
/// }
/// ```
#[component]
pub fn PaletteList(props: PaletteListProps) -> Element {
    rsx! {
        div {
            class: "palette-list",
            role: "group",
            "aria-label": "Palette selection",
            for entry in props.entries.iter() {
                {
                    let entry = *entry;
                    let on_select = props.on_select;
                    rsx! {
                        PaletteCard {
                            key: "{entry.palette.id}",
                            entry: entry,
                            on_click: move |_| on_select.call(entry.palette.id),
                        }
                    }
                }
            }
        }
    }
}

/// Properties for a single palette card
#[derive(Clone, PartialEq, Props)]
pub struct PaletteCardProps {
    pub entry: PaletteEntry,
    pub on_click: EventHandler<()>,
}

#[component]
pub fn PaletteCard(props: PaletteCardProps) -> Element {
    let palette = props.entry.palette;
    let active = props.entry.active;
    let badge = props.entry.badge();

    rsx! {
        Button {
            variant: ButtonVariant::Card,
            class: card_class(active).to_string(),
            pressed: active,
            onclick: move |_| props.on_click.call(()),
            div { class: "palette-copy",
                p { class: "palette-name", "{palette.name}" }
                p { class: "palette-description", "{palette.description}" }
            }
            span { class: "palette-badge", "{badge}" }
        }
    }
}

fn card_class(active: bool) -> &'static str {
    if active {
        "palette-card active"
    } else {
        "palette-card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibestudio_core::Studio;

    #[test]
    fn active_card_gets_active_class() {
        assert_eq!(card_class(true), "palette-card active");
        assert_eq!(card_class(false), "palette-card");
    }

    #[test]
    fn entries_from_studio_mark_one_card() {
        let studio = Studio::with_palette("glitch");
        let classes: Vec<_> = studio
            .palette_entries()
            .map(|entry| card_class(entry.active))
            .collect();
        assert_eq!(
            classes,
            vec!["palette-card", "palette-card", "palette-card", "palette-card active"]
        );
    }
}
