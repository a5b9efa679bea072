//! Session readout: balloons launched / popped.
//!
//! `SessionStats` is gameplay truth (the balloon systems write it); the text
//! entity is presentation derived from it. Headless apps register this plugin
//! too: the counters drive tests, the text just never gets rendered.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

/// Running totals for the current session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub launched: u32,
    pub popped: u32,
}

#[derive(Component, Debug, Clone, Copy)]
struct HudReadout;

pub fn plugin(app: &mut App) {
    app.init_resource::<SessionStats>();
    app.add_systems(OnEnter(GameState::InGame), spawn_readout);
    app.add_systems(
        Update,
        refresh_readout.run_if(in_state(GameState::InGame)),
    );
}

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        Name::new("HudReadout"),
        HudReadout,
        Text2d::new("launched 0 | popped 0"),
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
        Transform::from_xyz(0.0, 330.0, 50.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Rewrite the readout only when the counters actually moved.
fn refresh_readout(stats: Res<SessionStats>, mut q: Query<&mut Text2d, With<HudReadout>>) {
    if !stats.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else { return };
    text.0 = format!("launched {} | popped {}", stats.launched, stats.popped);
}
