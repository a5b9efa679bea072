//! Lighting plugin (Firefly) (render-only).
//!
//! One warm key light over the scene, plus a short glow flash wherever a
//! balloon pops. The glow systems only read `BalloonPopped` messages; they
//! never touch gameplay state.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::balloons::messages::BalloonPopped;

const GLOW_SECONDS: f32 = 0.25;
const GLOW_RANGE: f32 = 160.0;

#[derive(Component)]
pub struct SceneLight;

#[derive(Component)]
struct PopGlow {
    timer: Timer,
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (spawn_pop_glow, fade_pop_glow));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("SceneLight"),
        SceneLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.96, 0.88),
            range: 900.0,
            ..default()
        },
        Transform::from_xyz(0.0, 140.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn spawn_pop_glow(mut commands: Commands, mut popped: MessageReader<BalloonPopped>) {
    for ev in popped.read() {
        commands.spawn((
            Name::new("PopGlow"),
            PopGlow {
                timer: Timer::from_seconds(GLOW_SECONDS, TimerMode::Once),
            },
            PointLight2d {
                color: Color::srgb(1.0, 0.85, 0.6),
                range: GLOW_RANGE,
                ..default()
            },
            Transform::from_translation(ev.position.extend(10.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Shrink each glow over its lifetime, then remove it.
fn fade_pop_glow(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut PopGlow, &mut PointLight2d)>,
) {
    for (e, mut glow, mut light) in &mut q {
        glow.timer.tick(time.delta());
        if glow.timer.is_finished() {
            commands.entity(e).despawn();
            continue;
        }
        let t = glow.timer.elapsed_secs() / GLOW_SECONDS;
        light.range = GLOW_RANGE * (1.0 - t);
    }
}
