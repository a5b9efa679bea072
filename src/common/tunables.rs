//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// 150 px per meter, the point scale the balloon physics numbers assume.
    pub pixels_per_meter: f32,
    /// Downward gravity in m/s²; converted to pixels via `pixels_per_meter`.
    pub gravity: f32,
    /// Magnitude of the instantaneous launch impulse.
    pub launch_impulse: f32,
    pub balloon_mass: f32,
    pub balloon_damping: f32,
    pub balloon_radius: f32,
    /// Seconds per explode animation frame.
    pub pop_frame_seconds: f32,
    /// Extra distance beyond the scene bounds before a stray balloon is culled.
    pub offworld_margin: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 150.0,
            gravity: 9.81,
            launch_impulse: 70.0,
            balloon_mass: 0.1,
            balloon_damping: 0.5,
            balloon_radius: 17.0,
            pop_frame_seconds: 1.0 / 30.0,
            offworld_margin: 80.0,
        }
    }
}
