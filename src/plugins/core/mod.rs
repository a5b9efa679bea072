//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    // Daytime sky behind the balloons.
    app.insert_resource(ClearColor(Color::srgb(0.54, 0.78, 0.92)));
}

#[cfg(test)]
mod tests;
