//! Mood Tag Component
//!
//! Uppercase pill above the palette name showing the selected palette's mood.

use dioxus::prelude::*;

/// Properties for the MoodTag component
#[derive(Clone, PartialEq, Props)]
pub struct MoodTagProps {
    /// Mood label of the selected palette
    pub mood: &'static str,
}

/// Displays the palette mood as a tracked uppercase pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MoodTag { mood: studio.read().current_palette().mood }
/// }
/// ```
#[component]
pub fn MoodTag(props: MoodTagProps) -> Element {
    rsx! {
        span {
            class: "mood-tag",
            role: "status",
            "aria-live": "polite",
            "{props.mood}"
        }
    }
}
