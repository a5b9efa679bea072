//! Balloon factory + the consumer side of the firing pipeline.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::scene::{mouth_world_position, Cannon};
use crate::plugins::ui::debug_hud::SessionStats;

use super::components::Balloon;
use super::messages::LaunchRequest;
use super::variants::random_variant;

/// Launch impulse for an aim angle: `magnitude * (cos θ, sin θ)`.
#[inline]
pub fn launch_impulse(rotation: f32, magnitude: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin()) * magnitude
}

/// Velocity a resting balloon gains from an instantaneous impulse.
#[inline]
pub fn impulse_to_velocity(impulse: Vec2, mass: f32) -> Vec2 {
    impulse / mass
}

/// Spawn one balloon at `pos` with `velocity`, in a random livery.
///
/// Invariants stamped here, in one place:
/// - membership is always `Layer::Balloon`, filters are "everything", so
///   every balloon collides with the world and with each other;
/// - `CollisionEventsEnabled` is attached, so the contact handler sees every
///   balloon contact.
pub fn spawn_balloon(
    commands: &mut Commands,
    rng: &mut impl Rng,
    tunables: &Tunables,
    pos: Vec2,
    velocity: Vec2,
) -> Entity {
    let variant = random_variant(rng);
    let radius = tunables.balloon_radius;

    commands
        .spawn((
            Name::new(variant.name),
            Balloon { variant },
            Sprite {
                color: variant.color,
                // Slightly taller than wide so the disc reads as a balloon.
                custom_size: Some(Vec2::new(radius * 2.0, radius * 2.4)),
                ..default()
            },
            Transform::from_translation(pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(radius),
            Mass(tunables.balloon_mass),
            LinearDamping(tunables.balloon_damping),
            Restitution::new(0.2),
            CollisionLayers::new(Layer::Balloon, LayerMask::ALL),
            LinearVelocity(velocity),
            // Opt-in collision events: Avian only emits CollisionStart/End if
            // one collider has this marker.
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Consume `LaunchRequest` messages: one balloon per request, spawned at the
/// cannon's muzzle with the launch impulse applied along its aim.
///
/// A request whose cannon no longer exists is dropped with a debug log; the
/// schedules only run on live cannons, so this is a teardown race rather than
/// an invariant violation.
pub fn fire_requested(
    mut commands: Commands,
    mut requests: MessageReader<LaunchRequest>,
    tunables: Res<Tunables>,
    mut stats: ResMut<SessionStats>,
    q_cannons: Query<(&Cannon, &Transform)>,
) {
    let mut rng = rand::thread_rng();

    for req in requests.read() {
        let Ok((cannon, tf)) = q_cannons.get(req.cannon) else {
            debug!("dropping launch request for missing cannon {:?}", req.cannon);
            continue;
        };

        let pos = mouth_world_position(tf, cannon.mouth_offset);
        let impulse = launch_impulse(cannon.rotation, tunables.launch_impulse);
        let velocity = impulse_to_velocity(impulse, tunables.balloon_mass);

        spawn_balloon(&mut commands, &mut rng, &tunables, pos, velocity);
        stats.launched += 1;
    }
}
