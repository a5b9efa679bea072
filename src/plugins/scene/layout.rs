//! Scene layout definitions.
//!
//! The scene a level editor would author is a RON document parsed once into
//! typed specs. Every node name the game relies on is checked here, so a bad
//! layout fails the load with a `SceneError` instead of crashing a frame
//! callback later.

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

pub const LAYOUT_VERSION: u32 = 1;

/// Node names the game requires from the authored scene.
pub const LEFT_CANNON: &str = "left_cannon";
pub const RIGHT_CANNON: &str = "right_cannon";

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Which phase of the firing cycle a cannon starts in.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    /// Open with the long wait (left cannon).
    Long,
    /// Open with the short pause, desynchronizing the pair (right cannon).
    Short,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CannonSpec {
    pub name: String,
    pub pos: Vec2Def,
    /// zRotation in radians; balloons launch along `(cos, sin)` of this.
    pub rotation: f32,
    /// Muzzle point in cannon-local space.
    pub mouth: Vec2Def,
    pub lead: Lead,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct GroundSpec {
    /// Centerline of the ground strip.
    pub y: f32,
    pub thickness: f32,
}

/// Half extents of the playable area; also the off-world despawn envelope.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SceneBounds {
    pub half_width: f32,
    pub half_height: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SceneLayout {
    pub version: u32,
    pub bounds: SceneBounds,
    pub cannons: Vec<CannonSpec>,
    pub ground: GroundSpec,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene parse failed: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("scene layout version {found} unsupported (expected {LAYOUT_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("scene is missing required cannon '{name}'")]
    MissingCannon { name: &'static str },

    #[error("scene defines cannon '{name}' more than once")]
    DuplicateCannon { name: String },
}

impl SceneLayout {
    /// Parse and validate a layout document.
    pub fn from_ron(text: &str) -> Result<Self, SceneError> {
        let layout: SceneLayout = ron::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), SceneError> {
        if self.version != LAYOUT_VERSION {
            return Err(SceneError::UnsupportedVersion { found: self.version });
        }
        for (i, cannon) in self.cannons.iter().enumerate() {
            if self.cannons[..i].iter().any(|c| c.name == cannon.name) {
                return Err(SceneError::DuplicateCannon {
                    name: cannon.name.clone(),
                });
            }
        }
        for name in [LEFT_CANNON, RIGHT_CANNON] {
            if !self.cannons.iter().any(|c| c.name == name) {
                return Err(SceneError::MissingCannon { name });
            }
        }
        Ok(())
    }

    pub fn cannon(&self, name: &str) -> Option<&CannonSpec> {
        self.cannons.iter().find(|c| c.name == name)
    }
}
