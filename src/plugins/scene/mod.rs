//! Scene plugin: the authored cannon/ground layout.
//!
//! The layout is embedded as RON and resolved ONCE at load into typed entity
//! handles (`SceneHandles`). Nothing else in the game looks nodes up by name;
//! a malformed layout is a load-time `SceneError`, not a mid-frame panic.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::cannons::FiringSchedule;

pub mod layout;

use layout::{Lead, SceneLayout, LEFT_CANNON, RIGHT_CANNON};

/// The authored scene document. Embedded so the playground needs no runtime
/// file I/O; `SceneLayout::from_ron` still accepts arbitrary text in tests.
pub const SCENE_RON: &str = include_str!("../../../assets/scene.ron");

const CANNON_BARREL: Vec2 = Vec2::new(100.0, 30.0);

/// A cannon node. The muzzle is a typed local offset instead of a named child,
/// and the aim is kept as the plain zRotation angle the impulse math wants.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cannon {
    pub mouth_offset: Vec2,
    pub rotation: f32,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Ground;

/// Entity handles resolved at load time, plus the despawn envelope.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneHandles {
    pub left_cannon: Entity,
    pub right_cannon: Entity,
    /// Half extents of the playable area.
    pub bounds: Vec2,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_scene);
}

/// Muzzle position in scene space: the cannon-local mouth offset rotated by
/// the cannon's rotation, then translated by its position.
pub fn mouth_world_position(cannon_tf: &Transform, mouth_offset: Vec2) -> Vec2 {
    cannon_tf.translation.truncate() + (cannon_tf.rotation * mouth_offset.extend(0.0)).truncate()
}

fn spawn_scene(mut commands: Commands) {
    // The embedded document is static; if it fails to load that is a bug in
    // the repo, so fail fast with the structural error.
    let scene = SceneLayout::from_ron(SCENE_RON).expect("embedded scene layout rejected");

    spawn_ground(&mut commands, &scene);

    let mut left = None;
    let mut right = None;
    for spec in &scene.cannons {
        let e = spawn_cannon(&mut commands, spec);
        match spec.name.as_str() {
            LEFT_CANNON => left = Some(e),
            RIGHT_CANNON => right = Some(e),
            _ => {}
        }
    }

    info!(
        "scene loaded: {} cannons, bounds {:.0}x{:.0}",
        scene.cannons.len(),
        scene.bounds.half_width * 2.0,
        scene.bounds.half_height * 2.0,
    );

    commands.insert_resource(SceneHandles {
        // Validation proved both names exist.
        left_cannon: left.expect("validated layout lost left_cannon"),
        right_cannon: right.expect("validated layout lost right_cannon"),
        bounds: Vec2::new(scene.bounds.half_width, scene.bounds.half_height),
    });
}

fn spawn_cannon(commands: &mut Commands, spec: &layout::CannonSpec) -> Entity {
    let pos: Vec2 = spec.pos.into();
    let schedule = match spec.lead {
        Lead::Long => FiringSchedule::long_lead(),
        Lead::Short => FiringSchedule::short_lead(),
    };

    commands
        .spawn((
            Name::new(spec.name.clone()),
            Cannon {
                mouth_offset: spec.mouth.into(),
                rotation: spec.rotation,
            },
            schedule,
            Sprite {
                color: Color::srgb(0.25, 0.27, 0.33),
                custom_size: Some(CANNON_BARREL),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0))
                .with_rotation(Quat::from_rotation_z(spec.rotation)),
            RigidBody::Static,
            Collider::rectangle(CANNON_BARREL.x, CANNON_BARREL.y),
            CollisionLayers::new(Layer::Cannon, LayerMask::ALL),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

fn spawn_ground(commands: &mut Commands, scene: &SceneLayout) {
    let width = scene.bounds.half_width * 2.0;
    let size = Vec2::new(width, scene.ground.thickness);

    commands.spawn((
        Name::new("ground"),
        Ground,
        Sprite {
            color: Color::srgb(0.36, 0.54, 0.31),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, scene.ground.y, 0.5),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(Layer::Ground, LayerMask::ALL),
        DespawnOnExit(GameState::InGame),
    ));
}
