//! Reusable UI components
//!
//! Every component is theme-agnostic: the light/dark palette is chosen by a
//! class on an ancestor element.

mod button;
mod confetti;
mod platform_icon;
mod tag_input;

pub use button::*;
pub use confetti::*;
pub use platform_icon::*;
pub use tag_input::*;
