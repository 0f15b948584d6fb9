//! Reusable studio components.

mod button;
mod mood_tag;
mod palette_list;
mod prompt_loop;
mod rituals;

pub use button::*;
pub use mood_tag::*;
pub use palette_list::*;
pub use prompt_loop::*;
pub use rituals::*;
