//! Core types for Gamer Tags
//!
//! - [`Platform`]: the closed, ordered set of gaming platforms
//! - [`ProfileState`]: one tag per platform, always complete
//! - [`ThemeMode`]: light/dark presentation flag

pub mod platform;
pub mod profile;
pub mod theme;

pub use platform::Platform;
pub use profile::ProfileState;
pub use theme::ThemeMode;
