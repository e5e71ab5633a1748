//! Decorative confetti burst for milestone celebrations.
//!
//! DESIGN
//! ======
//! Particle geometry comes from a deterministic seeded generator so the
//! layout math is unit-testable off the rendering runtime; the caller
//! supplies the seed and owns the burst's lifetime.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use leptos::prelude::*;

/// Number of pieces in a full-width burst.
pub const PARTICLE_COUNT: usize = 48;

/// How long a burst stays mounted before the caller should clear it.
pub const BURST_DURATION_MS: u64 = 1_800;

const PALETTE: [&str; 5] = ["#f6d87c", "#7cc6f6", "#9ef67c", "#f67c9e", "#c77cf6"];

const MIN_FALL_MS: f64 = 900.0;
const MAX_FALL_MS: f64 = 1_600.0;
const MAX_DELAY_MS: f64 = 400.0;
const MIN_SIZE_PX: f64 = 6.0;
const MAX_SIZE_PX: f64 = 12.0;

/// One falling confetti piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position as a percentage of the container width.
    pub left_pct: f64,
    /// Animation start offset in milliseconds.
    pub delay_ms: f64,
    /// Fall duration in milliseconds.
    pub fall_ms: f64,
    /// Square side length in pixels.
    pub size_px: f64,
    /// Fill color from the fixed palette.
    pub color: &'static str,
}

/// Generate a deterministic particle layout for the given seed.
#[must_use]
pub fn particles(count: usize, seed: u64) -> Vec<Particle> {
    let mut state = seed;
    (0..count)
        .map(|index| Particle {
            left_pct: next_unit(&mut state) * 100.0,
            delay_ms: next_unit(&mut state) * MAX_DELAY_MS,
            fall_ms: MIN_FALL_MS + next_unit(&mut state) * (MAX_FALL_MS - MIN_FALL_MS),
            size_px: MIN_SIZE_PX + next_unit(&mut state) * (MAX_SIZE_PX - MIN_SIZE_PX),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}

// splitmix64 step; has no zero fixed point, so any seed works.
#[allow(clippy::cast_precision_loss)]
fn next_unit(state: &mut u64) -> f64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

fn piece_style(particle: &Particle) -> String {
    format!(
        "left:{:.2}%;animation-delay:{:.0}ms;animation-duration:{:.0}ms;width:{:.0}px;height:{:.0}px;background:{};",
        particle.left_pct,
        particle.delay_ms,
        particle.fall_ms,
        particle.size_px,
        particle.size_px,
        particle.color,
    )
}

/// Full-viewport confetti overlay. Purely decorative; hidden from
/// assistive tech.
#[component]
pub fn ConfettiBurst(seed: u64) -> impl IntoView {
    view! {
        <div class="confetti" aria-hidden="true">
            {particles(PARTICLE_COUNT, seed)
                .iter()
                .map(|particle| {
                    view! { <span class="confetti__piece" style=piece_style(particle)></span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
