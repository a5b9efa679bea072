//! Balloon components.

use bevy::prelude::*;

use super::variants::BalloonVariant;

/// A live balloon in flight.
#[derive(Component, Debug, Clone, Copy)]
pub struct Balloon {
    pub variant: &'static BalloonVariant,
}

/// Pop animation state.
///
/// Frame 0 is applied the moment the pop starts (by the contact handler);
/// `next_frame` is the index the animation system applies when `timer`
/// finishes. Once every frame has played for its full duration the balloon is
/// marked `PendingDespawn`.
#[derive(Component, Debug, Clone)]
pub struct Popping {
    pub next_frame: usize,
    pub timer: Timer,
}

impl Popping {
    pub fn new(frame_seconds: f32) -> Self {
        Self {
            next_frame: 1,
            timer: Timer::from_seconds(frame_seconds, TimerMode::Once),
        }
    }
}

/// Marker: balloon should be removed from the world.
///
/// We don't despawn inside the fixed physics step; we mark and despawn later
/// in PostUpdate. This keeps structural changes centralized and avoids
/// ordering hazards.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;
