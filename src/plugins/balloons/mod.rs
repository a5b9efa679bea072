//! Balloons plugin: factory, firing pipeline, contact pops.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!     advance_schedules (cannons)  --LaunchRequest-->  fire_requested
//!                                                      (spawns balloon bodies)
//!
//!   FixedPostUpdate (fixed dt)
//!     Avian emits CollisionStart
//!     handle_balloon_contacts:   balloon+balloon, first collider starts popping
//!     advance_pop_animation:     explode frames, then PendingDespawn
//!     despawn_offworld_balloons: outside bounds+margin, then PendingDespawn
//!
//!   PostUpdate
//!     despawn_marked: structural cleanup
//!     message buffers advance
//! ```
//!
//! Producers only enqueue intent. The factory is the single writer that
//! spawns balloons, and `despawn_marked` is the single system that removes
//! them.

pub mod components;
pub mod contact;
pub mod messages;
pub mod pop;
pub mod spawn;
pub mod variants;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::cannons;

pub struct BalloonsPlugin;

/// Maintain launch/pop message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_message_buffers(
    mut launches: ResMut<Messages<messages::LaunchRequest>>,
    mut pops: ResMut<Messages<messages::BalloonPopped>>,
) {
    launches.update();
    pops.update();
}

impl Plugin for BalloonsPlugin {
    fn build(&self, app: &mut App) {
        // Message storage for launch requests + pop notifications.
        app.init_resource::<Messages<messages::LaunchRequest>>();
        app.init_resource::<Messages<messages::BalloonPopped>>();
        app.add_systems(PostUpdate, update_message_buffers);

        // Update-phase pipeline: schedules -> requests -> balloons.
        app.add_systems(
            Update,
            spawn::fire_requested
                .after(cannons::advance_schedules)
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline: contacts start pops, pops play out,
        // strays get culled.
        app.add_systems(
            FixedPostUpdate,
            contact::handle_balloon_contacts
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
        app.add_systems(
            FixedPostUpdate,
            pop::advance_pop_animation
                .after(contact::handle_balloon_contacts)
                .run_if(in_state(GameState::InGame)),
        );
        app.add_systems(
            FixedPostUpdate,
            pop::despawn_offworld_balloons
                .after(pop::advance_pop_animation)
                .run_if(in_state(GameState::InGame)),
        );

        // PostUpdate structural cleanup: despawn after fixed-step work is done.
        app.add_systems(
            PostUpdate,
            pop::despawn_marked.run_if(in_state(GameState::InGame)),
        );
    }
}
