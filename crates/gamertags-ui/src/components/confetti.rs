//! Confetti Burst
//!
//! Purely decorative. Each new `generation` remounts the particle layer so
//! the CSS animation plays again; generation 0 renders nothing.

use dioxus::prelude::*;
use gamertags_core::ConfettiBurst;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Distance range a particle travels before falling, in pixels
const MIN_DISTANCE: f32 = 180.0;
const MAX_DISTANCE: f32 = 420.0;

/// One particle's launch parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal travel in px (negative is left)
    pub dx: f32,
    /// Vertical travel in px (negative is up)
    pub dy: f32,
    pub hue: u16,
    pub delay_ms: u32,
}

impl Particle {
    fn style(&self, origin_y: f32) -> String {
        format!(
            "top: {:.1}%; --dx: {:.1}px; --dy: {:.1}px; background: hsl({}, 90%, 60%); animation-delay: {}ms;",
            origin_y * 100.0,
            self.dx,
            self.dy,
            self.hue,
            self.delay_ms
        )
    }
}

/// Lay out the particles of one burst.
///
/// Directions fan out across `spread_degrees` centred on straight up. The
/// layout is a pure function of `burst` and `seed`.
pub fn particles(burst: &ConfettiBurst, seed: u32) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(u64::from(seed));
    let half_spread = burst.spread_degrees / 2.0;

    (0..burst.particle_count)
        .map(|_| {
            let angle = (-90.0 + rng.random_range(-half_spread..=half_spread)).to_radians();
            let distance = rng.random_range(MIN_DISTANCE..MAX_DISTANCE);
            Particle {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance,
                hue: rng.random_range(0..360),
                delay_ms: rng.random_range(0..120),
            }
        })
        .collect()
}

#[component]
pub fn Confetti(burst: ConfettiBurst, generation: u32) -> Element {
    if generation == 0 {
        return rsx! {};
    }

    let styles: Vec<String> = particles(&burst, generation)
        .iter()
        .map(|p| p.style(burst.origin_y))
        .collect();

    // Keyed by generation: every burst mounts a fresh layer.
    rsx! {
        for generation in [generation] {
            div {
                key: "{generation}",
                class: "confetti-layer",
                "aria-hidden": "true",
                for (i, style) in styles.iter().enumerate() {
                    span { key: "{i}", class: "confetti-piece", style: "{style}" }
                }
            }
        }
    }
}
