//! Button Components
//!
//! Two button styles share one component:
//! - Pill: small rounded control with a translucent fill (prompt shuffle)
//! - Card: full-width left-aligned block (palette list rows)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Rounded pill with hairline border, brightens on hover
    #[default]
    Pill,
    /// Full-width card row
    Card,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Card => "btn-card",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Pressed state for toggle-style buttons
    #[props(default)]
    pub pressed: Option<bool>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Pill,
///         onclick: move |_| studio.write().advance_prompt(),
///         "Shuffle prompt \u{21bb}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant, props.class.as_deref());
    let pressed = props.pressed.map(|p| if p { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-pressed": pressed,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn class_list(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {}", variant.class(), extra),
        None => variant.class().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
        assert_eq!(ButtonVariant::Card.class(), "btn-card");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Pill);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(class_list(ButtonVariant::Card, Some("active")), "btn-card active");
        assert_eq!(class_list(ButtonVariant::Card, Some("")), "btn-card");
        assert_eq!(class_list(ButtonVariant::Pill, None), "btn-pill");
    }
}
