//! Light and dark presentation.

mod styles;

use gamertags_core::ThemeMode;

pub use styles::GLOBAL_STYLES;

/// Class for the root element; selects the palette defined in
/// [`GLOBAL_STYLES`].
pub fn theme_class(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "app theme-dark",
        ThemeMode::Light => "app theme-light",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_class_matches_stylesheet() {
        for theme in [ThemeMode::Dark, ThemeMode::Light] {
            let class = theme_class(theme);
            let selector = format!(".{}", class.split(' ').nth(1).unwrap());
            assert!(GLOBAL_STYLES.contains(&selector), "missing {}", selector);
        }
    }
}
