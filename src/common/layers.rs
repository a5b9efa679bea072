//! Collision layers.
//!
//! `Balloon` doubles as the contact-test tag: the pop handler only reacts when
//! *both* colliders of a contact carry it. Ground and cannons get their own
//! layers so balloons collide with them physically without ever passing that
//! check.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Balloon,
    Ground,
    Cannon,
}
