//! Pop lifecycle: explode frames at a fixed frame rate, then removal.
//! Also culls balloons that drift out of the scene envelope.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::scene::SceneHandles;

use super::components::{Balloon, PendingDespawn, Popping};

/// Scale/alpha per explode frame, a texture-free rendition of a four-image
/// burst: the balloon swells and fades over four frames, then disappears.
pub const POP_FRAMES: [PopFrame; 4] = [
    PopFrame { scale: 1.15, alpha: 0.9 },
    PopFrame { scale: 1.4, alpha: 0.65 },
    PopFrame { scale: 1.7, alpha: 0.4 },
    PopFrame { scale: 2.0, alpha: 0.15 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopFrame {
    pub scale: f32,
    pub alpha: f32,
}

/// Stamp one explode frame onto a balloon's presentation.
#[inline]
pub fn apply_pop_frame(tf: &mut Transform, sprite: &mut Sprite, frame: PopFrame) {
    tf.scale = Vec3::splat(frame.scale);
    let mut c = sprite.color.to_srgba();
    c.alpha = frame.alpha;
    sprite.color = c.into();
}

/// Step every pop at its frame rate. Each finished timer applies the next
/// frame; once the last frame has played for its full duration the balloon is
/// marked `PendingDespawn`. The despawn itself happens in `despawn_marked` so
/// structural changes stay centralized.
pub fn advance_pop_animation(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Popping, &mut Sprite, &mut Transform), Without<PendingDespawn>>,
) {
    for (e, mut pop, mut sprite, mut tf) in &mut q {
        pop.timer.tick(time.delta());
        if !pop.timer.is_finished() {
            continue;
        }

        if let Some(frame) = POP_FRAMES.get(pop.next_frame) {
            apply_pop_frame(&mut tf, &mut sprite, *frame);
            pop.next_frame += 1;
            pop.timer.reset();
        } else {
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

/// Cull balloons that sail out of the scene envelope. Launches are aimed
/// inward, so anything past the bounds plus margin is gone for good and would
/// otherwise pile up as live physics bodies.
pub fn despawn_offworld_balloons(
    mut commands: Commands,
    tunables: Res<Tunables>,
    handles: Option<Res<SceneHandles>>,
    q: Query<(Entity, &Transform), (With<Balloon>, Without<PendingDespawn>)>,
) {
    let Some(handles) = handles else { return };
    let limit = handles.bounds + Vec2::splat(tunables.offworld_margin);

    for (e, tf) in &q {
        let p = tf.translation.truncate();
        if p.x.abs() > limit.x || p.y.abs() > limit.y {
            debug!("culling off-world balloon at ({:.0}, {:.0})", p.x, p.y);
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

/// Despawn everything marked for removal.
///
/// Centralizing despawn in one system keeps structural changes predictable.
pub fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
