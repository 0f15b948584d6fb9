//! Ritual Components
//!
//! Read-only checklists. Each ritual renders as a card with a dotted list of
//! steps.

use dioxus::prelude::*;
use vibestudio_core::Ritual;

/// Properties for the RitualList component
#[derive(Clone, PartialEq, Props)]
pub struct RitualListProps {
    pub rituals: &'static [Ritual],
}

/// All rituals in catalog order
#[component]
pub fn RitualList(props: RitualListProps) -> Element {
    rsx! {
        div { class: "ritual-list",
            for ritual in props.rituals.iter() {
                RitualCard { key: "{ritual.title}", ritual: *ritual }
            }
        }
    }
}

/// Properties for the RitualCard component
#[derive(Clone, PartialEq, Props)]
pub struct RitualCardProps {
    pub ritual: Ritual,
}

#[component]
pub fn RitualCard(props: RitualCardProps) -> Element {
    let ritual = props.ritual;

    rsx! {
        div { class: "ritual-card",
            p { class: "ritual-title", "{ritual.title}" }
            ul { class: "ritual-steps",
                for step in ritual.steps.iter() {
                    li { key: "{step}", class: "ritual-step",
                        span { class: "ritual-dot", "aria-hidden": "true" }
                        span { "{step}" }
                    }
                }
            }
        }
    }
}
