//! Centralized balloon livery table.
//! Single source of truth for variant names + colors. Update here only.

use bevy::prelude::*;
use rand::Rng;

pub const VARIANT_COUNT: usize = 13;

/// One balloon livery. The name doubles as the entity `Name` so spawned
/// balloons read sensibly in inspectors and logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonVariant {
    pub name: &'static str,
    pub color: Color,
}

/// The full livery set (kept high-contrast). Every launch draws uniformly
/// from this table. A `static` rather than a `const` so spawned balloons can
/// hold `&'static` references into it.
pub static VARIANTS: [BalloonVariant; VARIANT_COUNT] = [
    BalloonVariant { name: "balloon-red", color: Color::srgb(0.91, 0.22, 0.25) },
    BalloonVariant { name: "balloon-orange", color: Color::srgb(0.95, 0.52, 0.16) },
    BalloonVariant { name: "balloon-amber", color: Color::srgb(0.97, 0.69, 0.20) },
    BalloonVariant { name: "balloon-yellow", color: Color::srgb(0.95, 0.85, 0.25) },
    BalloonVariant { name: "balloon-lime", color: Color::srgb(0.62, 0.84, 0.24) },
    BalloonVariant { name: "balloon-green", color: Color::srgb(0.23, 0.72, 0.38) },
    BalloonVariant { name: "balloon-teal", color: Color::srgb(0.16, 0.66, 0.62) },
    BalloonVariant { name: "balloon-cyan", color: Color::srgb(0.22, 0.70, 0.88) },
    BalloonVariant { name: "balloon-blue", color: Color::srgb(0.22, 0.46, 0.89) },
    BalloonVariant { name: "balloon-indigo", color: Color::srgb(0.38, 0.32, 0.85) },
    BalloonVariant { name: "balloon-purple", color: Color::srgb(0.62, 0.36, 0.90) },
    BalloonVariant { name: "balloon-magenta", color: Color::srgb(0.86, 0.29, 0.74) },
    BalloonVariant { name: "balloon-pink", color: Color::srgb(0.95, 0.52, 0.66) },
];

/// Uniform pick over the livery table.
#[inline]
pub fn random_variant(rng: &mut impl Rng) -> &'static BalloonVariant {
    &VARIANTS[rng.gen_range(0..VARIANTS.len())]
}
