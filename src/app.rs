use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use vibestudio_core::{Studio, StyleMemo};

use crate::context::get_initial_palette;
use crate::pages::StudioPage;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The studio: hero gradient, prompt loop, palettes, rituals
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    StudioPage {},
}

/// Root application component.
///
/// Provides global styles, the session's studio state, and routing.
#[component]
pub fn App() -> Element {
    let studio: Signal<Studio> = use_signal(|| match get_initial_palette() {
        Some(id) => Studio::with_palette(id),
        None => Studio::new(),
    });

    // Provide studio state and the gradient memo to all child components
    use_context_provider(|| studio);
    use_context_provider(|| Rc::new(RefCell::new(StyleMemo::new())));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
