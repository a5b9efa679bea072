//! Global state machine.
//!
//! The playground auto-runs: the default state is already `InGame`, so the
//! scene spawns on startup without any menu in front of it.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
