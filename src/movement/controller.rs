//! Movement domain: waypoint-following locomotion state machine.
//!
//! The controller is pure state: every fixed tick it receives what the physics
//! layer sensed about the body and returns the velocity to apply, plus whether
//! the platform underfoot should be dropped through.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::{Facing, NavigationTuning};
use crate::navigation::{JumpTier, Path, Pathfinder, Waypoint, WaypointIntent};

/// What the physics layer sensed about the body this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyReadings {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Ground overlap probe at the feet reported contact.
    pub ground_contact: bool,
    /// Upward box cast from the body's bounds hit something.
    pub overhead_blocked: bool,
    pub gravity_y: f32,
}

/// Commands produced by one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub velocity: Vec2,
    pub drop_through: bool,
}

/// Transient motion state of an agent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentMotionState {
    /// `None` is the idle "no target" sentinel.
    pub current_target: Option<Waypoint>,
    pub facing: Facing,
    pub grounded: bool,
    pub jumping: bool,
    pub drop_pending: bool,
    /// Waiting clear of an overhead obstruction before a standing jump.
    pub priming_standing_jump: bool,
}

/// How a jump's vertical launch velocity was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpLaunch {
    Standing { tier: JumpTier, vertical_velocity: f32 },
    Ballistic { vertical_velocity: f32 },
}

impl JumpLaunch {
    pub fn vertical_velocity(self) -> f32 {
        match self {
            Self::Standing {
                vertical_velocity, ..
            }
            | Self::Ballistic { vertical_velocity } => vertical_velocity,
        }
    }
}

/// Pick the launch velocity for a jump toward `target` from `position`.
///
/// Targets nearly overhead use the calibrated table for their tier; anything
/// further away is solved as an arc at walking speed.
pub fn choose_jump_launch(
    target: &Waypoint,
    position: Vec2,
    tuning: &NavigationTuning,
    pathfinder: &dyn Pathfinder,
    gravity_y: f32,
) -> JumpLaunch {
    let offset = target.position - position;

    if offset.x.abs() <= tuning.standing_jump_max_dx {
        if let WaypointIntent::Jump(tier) = target.intent {
            if let Some(vertical_velocity) = tuning.jump_heights.velocity(tier) {
                return JumpLaunch::Standing {
                    tier,
                    vertical_velocity,
                };
            }
        }
    }

    let solved =
        pathfinder.solve_launch_velocity(offset.x, offset.y, tuning.move_speed, gravity_y);
    JumpLaunch::Ballistic {
        vertical_velocity: solved.y,
    }
}

/// A travel request whose pathfinder returned no waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unreachable {
    pub from: Vec2,
    pub to: Vec2,
}

impl std::fmt::Display for Unreachable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No path from {} to location {}", self.from, self.to)
    }
}

/// Deferred stall check scheduled after a jump.
#[derive(Debug, Clone)]
struct PendingRecalibration {
    snapshot: Option<Waypoint>,
    timer: Timer,
}

/// Waypoint-following controller for one agent.
#[derive(Component, Debug, Clone, Default)]
pub struct LocomotionController {
    path: Path,
    motion: AgentMotionState,
    recalibrations: Vec<PendingRecalibration>,
}

impl LocomotionController {
    /// Controller holding `path` without a current target yet.
    pub fn with_path(path: Path) -> Self {
        Self {
            path,
            ..default()
        }
    }

    pub fn motion(&self) -> &AgentMotionState {
        &self.motion
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_target(&self) -> Option<&Waypoint> {
        self.motion.current_target.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.motion.current_target.is_none()
    }

    pub fn pending_recalibrations(&self) -> usize {
        self.recalibrations.len()
    }

    /// Request a path to `destination` and start following it.
    ///
    /// Any in-flight path and jump/drop intent is abandoned. An unreachable
    /// destination leaves the controller untouched.
    pub fn travel(
        &mut self,
        from: Vec2,
        destination: Vec2,
        pathfinder: &dyn Pathfinder,
    ) -> Result<usize, Unreachable> {
        let path = pathfinder.find_path(from, destination);
        if path.is_empty() {
            return Err(Unreachable {
                from,
                to: destination,
            });
        }

        let waypoints = path.len();
        self.path = path;
        self.motion.jumping = false;
        self.motion.drop_pending = false;
        self.motion.priming_standing_jump = false;
        self.advance();
        Ok(waypoints)
    }

    /// Pop the next waypoint into the current target, arming jump or drop
    /// intent from its tag. An exhausted path leaves the idle sentinel.
    pub fn advance(&mut self) {
        let Some(next) = self.path.pop_front() else {
            self.motion.current_target = None;
            return;
        };

        match next.intent {
            WaypointIntent::Jump(_) if !self.motion.jumping => self.motion.jumping = true,
            WaypointIntent::Drop => self.motion.drop_pending = true,
            _ => {}
        }

        debug!(
            "[NAV] Advanced to {:?} at {}, {} waypoints left",
            next.intent,
            next.position,
            self.path.len()
        );
        self.motion.current_target = Some(next);
    }

    /// One fixed physics step.
    pub fn tick(
        &mut self,
        body: &BodyReadings,
        tuning: &NavigationTuning,
        pathfinder: &dyn Pathfinder,
        delta: Duration,
    ) -> TickOutput {
        self.run_recalibrations(body.position, tuning, pathfinder, delta);

        let grounded = tuning.is_grounded(body.ground_contact, body.velocity.y);
        self.motion.grounded = grounded;
        let mut velocity = body.velocity;

        match self.motion.current_target {
            Some(target) if !self.motion.jumping && !self.motion.drop_pending => {
                let direction = steer_direction(target.position.x, body.position.x, tuning.padding);
                self.walk(&mut velocity, direction, tuning);

                if body.position.distance(target.position) < tuning.min_target_distance && grounded
                {
                    self.advance();
                }
            }
            _ => self.walk(&mut velocity, 0.0, tuning),
        }

        if self.motion.jumping {
            self.execute_jump(body, grounded, &mut velocity, tuning, pathfinder);
        }

        let mut drop_through = false;
        if self.motion.drop_pending && !self.motion.jumping {
            self.motion.drop_pending = false;
            drop_through = true;
        }

        TickOutput {
            velocity,
            drop_through,
        }
    }

    fn execute_jump(
        &mut self,
        body: &BodyReadings,
        grounded: bool,
        velocity: &mut Vec2,
        tuning: &NavigationTuning,
        pathfinder: &dyn Pathfinder,
    ) {
        let Some(target) = self.motion.current_target else {
            self.motion.jumping = false;
            self.motion.priming_standing_jump = false;
            return;
        };

        if body.overhead_blocked {
            // Back away from the target until the space overhead opens up.
            let away = if target.position.x - body.position.x >= 0.0 {
                -1.0
            } else {
                1.0
            };
            self.walk(velocity, away, tuning);
            self.motion.priming_standing_jump = true;
            debug!("[NAV] Overhead blocked, sidestepping before a standing jump");
            return;
        }

        if grounded {
            let launch =
                choose_jump_launch(&target, body.position, tuning, pathfinder, body.gravity_y);
            velocity.y = launch.vertical_velocity();
            if let JumpLaunch::Ballistic { .. } = launch {
                // The arc was solved at walking speed toward the target
                let direction =
                    steer_direction(target.position.x, body.position.x, tuning.padding);
                self.walk(velocity, direction, tuning);
            }
            debug!("[NAV] Jump launched: {:?}", launch);
        }

        if self.motion.priming_standing_jump {
            if velocity.y < tuning.priming_release_speed {
                self.motion.priming_standing_jump = false;
            }
        } else {
            self.advance();
            self.motion.jumping = false;
            self.schedule_recalibration(tuning.recalibrate_delay());
        }
    }

    fn walk(&mut self, velocity: &mut Vec2, direction: f32, tuning: &NavigationTuning) {
        velocity.x = direction * tuning.move_speed;
        if direction > 0.0 {
            self.motion.facing = Facing::Right;
        } else if direction < 0.0 {
            self.motion.facing = Facing::Left;
        }
    }

    /// Queue a stall check that fires after `wait`, remembering the target
    /// current right now.
    pub fn schedule_recalibration(&mut self, wait: Duration) {
        self.recalibrations.push(PendingRecalibration {
            snapshot: self.motion.current_target,
            timer: Timer::new(wait, TimerMode::Once),
        });
    }

    fn run_recalibrations(
        &mut self,
        position: Vec2,
        tuning: &NavigationTuning,
        pathfinder: &dyn Pathfinder,
        delta: Duration,
    ) {
        let mut due = Vec::new();
        self.recalibrations.retain_mut(|pending| {
            pending.timer.tick(delta);
            if pending.timer.remaining().is_zero() {
                due.push(pending.snapshot);
                false
            } else {
                true
            }
        });

        for snapshot in due {
            self.recalibrate(snapshot, position, tuning, pathfinder);
        }
    }

    /// Replan toward the path's end goal if the agent never got past
    /// `snapshot`. Returns `None` when progress was made and nothing happened.
    pub fn recalibrate(
        &mut self,
        snapshot: Option<Waypoint>,
        position: Vec2,
        tuning: &NavigationTuning,
        pathfinder: &dyn Pathfinder,
    ) -> Option<Result<usize, Unreachable>> {
        if self.path.is_empty() || self.motion.current_target != snapshot {
            return None;
        }

        let end_goal = self.path.truncate_to_tail()?;
        let destination = end_goal.position - Vec2::Y * tuning.recalibrate_drop;
        info!("[NAV] Recalibrating toward {}", destination);

        let outcome = self.travel(position, destination, pathfinder);
        if let Err(unreachable) = &outcome {
            info!("[NAV] {}", unreachable);
        }
        Some(outcome)
    }
}

/// -1, 0 or 1 toward `target_x`, with a dead zone of `padding`.
pub fn steer_direction(target_x: f32, x: f32, padding: f32) -> f32 {
    if target_x - padding > x {
        1.0
    } else if target_x + padding < x {
        -1.0
    } else {
        0.0
    }
}
