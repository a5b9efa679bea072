//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::{balloons::BalloonsPlugin, ui::debug_hud};

pub mod balloons;
pub mod cannons;
pub mod core;
pub mod physics;
pub mod scene;
pub mod ui;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    scene::plugin(app);
    cannons::plugin(app);
    debug_hud::plugin(app);
    app.add_plugins(BalloonsPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
