//! Balloon-on-balloon contact resolution.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::ui::debug_hud::SessionStats;

use super::components::{Balloon, Popping};
use super::messages::BalloonPopped;
use super::pop::{apply_pop_frame, POP_FRAMES};

#[inline]
fn is_balloon_layer(layers: &CollisionLayers) -> bool {
    layers.memberships.has_all(Layer::Balloon)
}

/// Layers for a balloon that is mid-pop: membership stays `Balloon` but the
/// filters are cleared, so it stops generating new contacts while the explode
/// frames play.
#[inline]
pub fn popping_balloon_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Balloon, [] as [Layer; 0])
}

/// Resolve balloon contacts: a balloon-on-balloon `CollisionStart` pops
/// exactly one participant, the first collider of the pair. The partner flies
/// on untouched. Contacts with the ground or a cannon just bounce.
///
/// This system only starts the pop (state, first frame, layer swap, velocity
/// kill); frame stepping and removal live in `pop`.
pub fn handle_balloon_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    mut stats: ResMut<SessionStats>,
    mut popped_out: MessageWriter<BalloonPopped>,
    // Layer reads on collider entities
    q_layers: Query<&CollisionLayers>,
    // Fast "already mid-pop?" check
    q_popping: Query<(), With<Popping>>,
    mut q_balloons: Query<(&mut Transform, &mut Sprite), With<Balloon>>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (first, second) = (ev.collider1, ev.collider2);

        let (Ok(l1), Ok(l2)) = (q_layers.get(first), q_layers.get(second)) else {
            continue;
        };
        if !(is_balloon_layer(l1) && is_balloon_layer(l2)) {
            continue;
        }

        // Deduplicate per balloon within this batch.
        if !seen.insert(first) {
            continue;
        }

        // A balloon that is already popping keeps playing; this contact is
        // stale and pops nobody.
        if q_popping.contains(first) {
            continue;
        }
        let Ok((mut tf, mut sprite)) = q_balloons.get_mut(first) else {
            continue;
        };

        commands.entity(first).insert((
            Popping::new(tunables.pop_frame_seconds),
            popping_balloon_layers(),
            // Pop in place: the burst plays where the contact happened.
            LinearVelocity(Vec2::ZERO),
        ));
        apply_pop_frame(&mut tf, &mut sprite, POP_FRAMES[0]);

        stats.popped += 1;
        popped_out.write(BalloonPopped {
            position: tf.translation.truncate(),
        });
    }
}
