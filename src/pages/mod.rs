//! Page components for Vibe Coding Studio.

mod studio;

pub use studio::StudioPage;
