//! End-to-end pop flow without the physics pipeline: inject `CollisionStart`
//! directly and run the contact + animation + despawn systems on an app.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use balloon_cannons::common::layers::Layer;
use balloon_cannons::common::tunables::Tunables;
use balloon_cannons::plugins::balloons::components::{Balloon, Popping};
use balloon_cannons::plugins::balloons::messages::BalloonPopped;
use balloon_cannons::plugins::balloons::{contact, pop, variants};
use balloon_cannons::plugins::ui::debug_hud::SessionStats;

/// `Time<Fixed>` with a long period so the real fixed loop never ticks during
/// the test, keeping the manually advanced delta in place across updates.
fn coarse_fixed_time(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::from_seconds(5.0);
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

fn spawn_test_balloon(app: &mut App, pos: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Balloon {
                variant: &variants::VARIANTS[0],
            },
            Sprite::default(),
            Transform::from_translation(pos.extend(2.0)),
            CollisionLayers::new(Layer::Balloon, LayerMask::ALL),
        ))
        .id()
}

#[test]
fn contact_starts_pop_and_reports() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_systems(Update, contact::handle_balloon_contacts);

    app.insert_resource(Tunables::default());
    app.insert_resource(SessionStats::default());
    // Messages backing storage must exist for MessageReader<CollisionStart>.
    app.world_mut().init_resource::<Messages<CollisionStart>>();
    app.world_mut().init_resource::<Messages<BalloonPopped>>();

    let a = spawn_test_balloon(&mut app, Vec2::new(-10.0, 120.0));
    let b = spawn_test_balloon(&mut app, Vec2::new(10.0, 120.0));

    app.world_mut().write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: None,
        body2: None,
    });
    app.update();

    assert!(
        app.world().get::<Popping>(a).is_some(),
        "first collider starts popping"
    );
    assert!(
        app.world().get::<Popping>(b).is_none(),
        "partner keeps flying"
    );
    assert_eq!(app.world().resource::<SessionStats>().popped, 1);
    assert_eq!(app.world().resource::<Messages<BalloonPopped>>().len(), 1);
}

#[test]
fn popped_balloon_leaves_the_world() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_systems(
        Update,
        (contact::handle_balloon_contacts, pop::advance_pop_animation).chain(),
    );
    app.add_systems(PostUpdate, pop::despawn_marked);

    app.insert_resource(Tunables::default());
    app.insert_resource(SessionStats::default());
    app.world_mut().init_resource::<Messages<CollisionStart>>();
    app.world_mut().init_resource::<Messages<BalloonPopped>>();
    // Each update steps the animation by a full frame duration and then some.
    app.insert_resource(coarse_fixed_time(0.1));

    let a = spawn_test_balloon(&mut app, Vec2::new(-10.0, 120.0));
    let b = spawn_test_balloon(&mut app, Vec2::new(10.0, 120.0));

    app.world_mut().write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: None,
        body2: None,
    });

    // Contact, four explode frames, then removal.
    for _ in 0..6 {
        app.update();
    }

    assert!(
        app.world().get::<Balloon>(a).is_none(),
        "popped balloon despawns after the last frame"
    );
    assert!(
        app.world().get::<Balloon>(b).is_some(),
        "partner survives the whole exchange"
    );
}
