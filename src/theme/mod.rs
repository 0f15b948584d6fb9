//! Visual theme for the studio window.

mod styles;

pub use styles::GLOBAL_STYLES;
