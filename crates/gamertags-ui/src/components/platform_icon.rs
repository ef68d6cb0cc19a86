//! Platform badge shown on each profile card row.

use dioxus::prelude::*;
use gamertags_core::Platform;

/// Glyph standing in for the platform's logo
pub fn platform_glyph(platform: Platform) -> &'static str {
    match platform {
        Platform::Steam => "\u{2668}",
        Platform::Xbox => "\u{24CD}",
        Platform::Playstation => "\u{25B3}",
        Platform::Nintendo => "\u{25CE}",
        Platform::Twitch => "\u{25B6}",
        Platform::Discord => "\u{2709}",
    }
}

/// Accent class giving each platform row its own gradient
pub fn platform_accent_class(platform: Platform) -> String {
    format!("platform-{}", platform.key())
}

#[component]
pub fn PlatformIcon(platform: Platform) -> Element {
    let glyph = platform_glyph(platform);
    let name = platform.display_name();

    rsx! {
        span {
            class: "platform-icon",
            role: "img",
            "aria-label": "{name}",
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_platform_has_a_distinct_glyph() {
        let glyphs: HashSet<&str> = Platform::ALL.into_iter().map(platform_glyph).collect();
        assert_eq!(glyphs.len(), Platform::COUNT);
    }

    #[test]
    fn accent_class_uses_key() {
        assert_eq!(platform_accent_class(Platform::Playstation), "platform-playstation");
    }
}
