//! Studio context provider.
//!
//! The root `App` owns one [`Studio`] per window and shares it through
//! Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut studio = use_studio();
//! studio.write().advance_prompt();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use vibestudio_core::{Studio, StyleMemo};

/// Shared gradient memo for context.
///
/// Keyed on palette id, so re-renders caused by prompt shuffles reuse the
/// cached style and only a palette change derives a new one.
pub type SharedStyleMemo = Rc<RefCell<StyleMemo>>;

/// Get the palette requested on the command line, if any.
pub fn get_initial_palette() -> Option<&'static str> {
    crate::get_initial_palette()
}

/// Hook to access the session's studio state.
///
/// Writes through the returned signal re-render every reader.
pub fn use_studio() -> Signal<Studio> {
    use_context::<Signal<Studio>>()
}

/// Hook to access the window's gradient style memo.
pub fn use_style_memo() -> SharedStyleMemo {
    use_context::<SharedStyleMemo>()
}
