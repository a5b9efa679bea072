//! Buffered firing intents.
//!
//! The schedule systems only enqueue intent (`LaunchRequest`); the balloon
//! factory is the single consumer that spawns entities. Render-side FX listen
//! on `BalloonPopped` instead of poking gameplay state.

use bevy::prelude::*;

/// One balloon should be launched from `cannon`.
#[derive(Message, Clone, Copy, Debug)]
pub struct LaunchRequest {
    pub cannon: Entity,
}

/// A balloon started its pop at `position` (scene space).
#[derive(Message, Clone, Copy, Debug)]
pub struct BalloonPopped {
    pub position: Vec2,
}
