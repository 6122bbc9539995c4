//! Level domain: idle agents wandering between route endpoints.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::WanderDef;
use crate::movement::{
    Agent, LocomotionController, ManualControl, TravelRequest, secs_to_duration,
};

/// Endpoints closer than this to the agent are not worth wandering to.
pub const MIN_WANDER_DISTANCE: f32 = 1.0;

/// Seeded source of wander destinations.
#[derive(Resource, Debug, Clone)]
pub struct WanderState {
    rng: ChaCha8Rng,
    targets: Vec<Vec2>,
}

impl WanderState {
    pub fn new(def: WanderDef, targets: Vec<Vec2>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(def.seed),
            targets,
        }
    }

    /// Random target at least `MIN_WANDER_DISTANCE` from `current`.
    pub fn pick_destination(&mut self, current: Vec2) -> Option<Vec2> {
        let candidates: Vec<Vec2> = self
            .targets
            .iter()
            .copied()
            .filter(|t| t.distance(current) >= MIN_WANDER_DISTANCE)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }
}

/// How long an agent must sit idle on the ground before wandering off.
#[derive(Component, Debug, Clone)]
pub struct Wanderer {
    pub idle: Timer,
}

impl Wanderer {
    pub fn new(idle_secs: f32) -> Self {
        Self {
            idle: Timer::new(secs_to_duration(idle_secs), TimerMode::Once),
        }
    }
}

pub(crate) fn wander_when_idle(
    time: Res<Time>,
    state: Option<ResMut<WanderState>>,
    mut agents: Query<
        (Entity, &Transform, &LocomotionController, &mut Wanderer),
        (With<Agent>, Without<ManualControl>),
    >,
    mut requests: MessageWriter<TravelRequest>,
) {
    let Some(mut state) = state else {
        return;
    };

    for (agent, transform, controller, mut wanderer) in &mut agents {
        if !controller.is_idle() || !controller.motion().grounded {
            wanderer.idle.reset();
            continue;
        }

        wanderer.idle.tick(time.delta());
        if !wanderer.idle.is_finished() {
            continue;
        }
        wanderer.idle.reset();

        let current = transform.translation.truncate();
        if let Some(destination) = state.pick_destination(current) {
            debug!("[WANDER] {:?} heading to {}", agent, destination);
            requests.write(TravelRequest { agent, destination });
        }
    }
}
