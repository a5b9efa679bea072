//! Cannon firing schedules.
//!
//! Each cannon carries its own infinitely repeating wait/fire sequence:
//! randomized waits alternate with instantaneous fire triggers, and the two
//! cannons share no state. This is the producer side of the balloon pipeline;
//! expired `Fire` steps become `LaunchRequest` messages that the balloons
//! plugin consumes.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;

use crate::common::state::GameState;
use crate::plugins::balloons::messages::LaunchRequest;
use crate::plugins::scene::Cannon;

/// Nominal wait durations, seconds.
const LONG_WAIT: f32 = 1.0;
const SHORT_WAIT: f32 = 0.55;
const WAIT_JITTER: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleStep {
    /// Pause for `base ± jitter` seconds, uniform.
    Wait { base: f32, jitter: f32 },
    /// Fire one balloon; takes no time.
    Fire,
}

impl ScheduleStep {
    const fn wait(base: f32) -> Self {
        Self::Wait {
            base,
            jitter: WAIT_JITTER,
        }
    }
}

/// Uniform draw from `[base - jitter, base + jitter]`.
pub fn jittered_wait(rng: &mut impl Rng, base: f32, jitter: f32) -> f32 {
    if jitter <= 0.0 {
        return base;
    }
    rng.gen_range((base - jitter)..=(base + jitter))
}

/// A repeating wait/fire sequence. The cursor walks `steps` forever; the
/// current wait's jittered duration is rolled lazily when the wait begins.
#[derive(Component, Debug, Clone)]
pub struct FiringSchedule {
    steps: Vec<ScheduleStep>,
    cursor: usize,
    remaining: Option<f32>,
}

impl FiringSchedule {
    /// Left cannon: long wait, then three shots with short pauses, then a
    /// long tail before the cycle restarts. Nominal cycle 3.10 s.
    pub fn long_lead() -> Self {
        Self::with_steps(vec![
            ScheduleStep::wait(LONG_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(SHORT_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(SHORT_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(LONG_WAIT),
        ])
    }

    /// Right cannon: the same cycle led by the short pause, so the pair stays
    /// desynchronized. Nominal cycle 2.65 s.
    pub fn short_lead() -> Self {
        Self::with_steps(vec![
            ScheduleStep::wait(SHORT_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(SHORT_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(SHORT_WAIT),
            ScheduleStep::Fire,
            ScheduleStep::wait(LONG_WAIT),
        ])
    }

    /// `steps` must contain at least one `Wait`, or `advance` could never
    /// yield back.
    pub fn with_steps(steps: Vec<ScheduleStep>) -> Self {
        debug_assert!(
            steps.iter().any(|s| matches!(s, ScheduleStep::Wait { .. })),
            "a firing schedule needs at least one wait step"
        );
        Self {
            steps,
            cursor: 0,
            remaining: None,
        }
    }

    pub fn steps(&self) -> &[ScheduleStep] {
        &self.steps
    }

    /// Sum of the nominal wait durations in one loop of the sequence.
    pub fn nominal_cycle_seconds(&self) -> f32 {
        self.steps
            .iter()
            .map(|s| match s {
                ScheduleStep::Wait { base, .. } => *base,
                ScheduleStep::Fire => 0.0,
            })
            .sum()
    }

    /// Fire triggers in one loop of the sequence.
    pub fn fires_per_cycle(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, ScheduleStep::Fire))
            .count()
    }

    /// Advance the sequence by `dt` seconds and return how many fire triggers
    /// elapsed. An oversized `dt` crosses as many steps as it covers.
    pub fn advance(&mut self, mut dt: f32, rng: &mut impl Rng) -> u32 {
        let mut fires = 0;
        loop {
            match self.steps[self.cursor] {
                ScheduleStep::Fire => {
                    fires += 1;
                    self.step_forward();
                }
                ScheduleStep::Wait { base, jitter } => {
                    let remaining = self
                        .remaining
                        .get_or_insert_with(|| jittered_wait(rng, base, jitter));
                    if *remaining > dt {
                        *remaining -= dt;
                        return fires;
                    }
                    dt -= *remaining;
                    self.remaining = None;
                    self.step_forward();
                }
            }
        }
    }

    fn step_forward(&mut self) {
        self.cursor = (self.cursor + 1) % self.steps.len();
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        advance_schedules.run_if(in_state(GameState::InGame)),
    );
}

/// Tick every cannon's schedule and emit one `LaunchRequest` per elapsed fire
/// trigger. The schedules never touch the world beyond their own component.
pub fn advance_schedules(
    time: Res<Time>,
    mut writer: MessageWriter<LaunchRequest>,
    mut q: Query<(Entity, &mut FiringSchedule), With<Cannon>>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for (cannon, mut schedule) in &mut q {
        for _ in 0..schedule.advance(dt, &mut rng) {
            writer.write(LaunchRequest { cannon });
        }
    }
}
