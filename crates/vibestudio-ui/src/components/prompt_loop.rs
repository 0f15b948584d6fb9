//! Prompt Loop and Quick Loop Components
//!
//! The prompt card shows the current prompt with a shuffle control. Quick
//! loops are short static tips laid out in a two-column grid.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Label on the shuffle control
pub const SHUFFLE_LABEL: &str = "Shuffle prompt \u{21bb}";

/// Properties for the PromptLoop component
#[derive(Clone, PartialEq, Props)]
pub struct PromptLoopProps {
    /// Prompt at the current cursor
    pub prompt: &'static str,
    /// Handler called when the shuffle control is clicked
    pub on_shuffle: EventHandler<()>,
}

/// Card with the current prompt and a shuffle button
#[component]
pub fn PromptLoop(props: PromptLoopProps) -> Element {
    rsx! {
        div { class: "prompt-loop glass-panel",
            div { class: "prompt-loop-header",
                p { class: "eyebrow", "Prompt Loop" }
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| props.on_shuffle.call(()),
                    "{SHUFFLE_LABEL}"
                }
            }
            p { class: "prompt-text", "{props.prompt}" }
        }
    }
}

/// Properties for the QuickLoopGrid component
#[derive(Clone, PartialEq, Props)]
pub struct QuickLoopGridProps {
    pub loops: &'static [&'static str],
}

/// Grid of quick-loop tips in catalog order
#[component]
pub fn QuickLoopGrid(props: QuickLoopGridProps) -> Element {
    rsx! {
        div { class: "quick-loops",
            for tip in props.loops.iter() {
                div { key: "{tip}", class: "quick-loop", "{tip}" }
            }
        }
    }
}
