//! Gamer Tags UI Components
//!
//! Dioxus components shared by the Gamer Tags desktop app.
//!
//! ## Components
//!
//! - [`Button`]: pill-shaped action button in four color variants
//! - [`TagInput`]: per-platform text input with a floating label
//! - [`PlatformIcon`]: glyph badge for a platform
//! - [`Confetti`]: decorative burst played after a successful copy
//!
//! Colors and layout come from the stylesheet the app injects; components
//! only emit class names.

pub mod components;

pub use components::*;
