//! Movement domain: tests for the locomotion controller state machine.

use std::sync::Mutex;
use std::time::Duration;

use bevy::prelude::Vec2;

use super::{
    BodyReadings, Facing, JumpHeightTable, JumpLaunch, LocomotionController, NavigationTuning,
    choose_jump_launch, secs_to_duration, steer_direction,
};
use crate::navigation::{GridCell, InvalidTag, JumpTier, Path, Pathfinder, Waypoint};

const GRAVITY: f32 = -9.81;
const DT: Duration = Duration::from_millis(20);
const EPSILON: f32 = 1e-4;

/// Pathfinder returning a fixed path and a fixed ballistic answer, recording
/// every destination it was asked for.
struct StubPathfinder {
    path: Vec<Waypoint>,
    launch: Vec2,
    requests: Mutex<Vec<Vec2>>,
}

impl StubPathfinder {
    fn new(path: Vec<Waypoint>) -> Self {
        Self {
            path,
            launch: Vec2::new(4.0, 42.0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self::new(Vec::new())
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> Option<Vec2> {
        self.requests.lock().unwrap().last().copied()
    }
}

impl Pathfinder for StubPathfinder {
    fn find_path(&self, _from: Vec2, to: Vec2) -> Path {
        self.requests.lock().unwrap().push(to);
        self.path.clone().into()
    }

    fn cell_center(&self, cell: GridCell) -> Result<Waypoint, InvalidTag> {
        Waypoint::from_tagged(cell.x as f32, cell.y as f32, cell.tag)
    }

    fn solve_launch_velocity(&self, _dx: f32, _dy: f32, _speed: f32, _gravity: f32) -> Vec2 {
        self.launch
    }
}

fn tier(t: u8) -> JumpTier {
    JumpTier::new(t).unwrap()
}

fn grounded_at(x: f32, y: f32) -> BodyReadings {
    BodyReadings {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        ground_contact: true,
        overhead_blocked: false,
        gravity_y: GRAVITY,
    }
}

fn airborne_at(x: f32, y: f32, vy: f32) -> BodyReadings {
    BodyReadings {
        position: Vec2::new(x, y),
        velocity: Vec2::new(0.0, vy),
        ground_contact: false,
        overhead_blocked: false,
        gravity_y: GRAVITY,
    }
}

/// Controller whose current target is a jump toward `target`.
fn armed_jump(target: Waypoint, rest: &[Waypoint]) -> LocomotionController {
    let mut waypoints = vec![target];
    waypoints.extend_from_slice(rest);
    let mut controller = LocomotionController::with_path(waypoints.into());
    controller.advance();
    assert!(controller.motion().jumping);
    controller
}

// -----------------------------------------------------------------------------
// Advance tests
// -----------------------------------------------------------------------------

#[test]
fn test_advance_drains_path_then_stays_idle() {
    let waypoints: Vec<Waypoint> = (0..4).map(|i| Waypoint::walk(i as f32, 0.0)).collect();
    let mut controller = LocomotionController::with_path(waypoints.clone().into());

    for expected in &waypoints {
        controller.advance();
        assert_eq!(controller.current_target(), Some(expected));
    }
    assert!(controller.path().is_empty());

    controller.advance();
    assert!(controller.is_idle());

    controller.advance();
    assert!(controller.is_idle());
    assert!(controller.path().is_empty());
}

#[test]
fn test_advance_arms_jump_and_drop() {
    let mut controller = LocomotionController::with_path(
        vec![
            Waypoint::jump(1.0, 2.0, tier(2)),
            Waypoint::drop_through(1.0, 0.0),
        ]
        .into(),
    );

    controller.advance();
    assert!(controller.motion().jumping);
    assert!(!controller.motion().drop_pending);

    controller.advance();
    assert!(controller.motion().drop_pending);
}

// -----------------------------------------------------------------------------
// Travel tests
// -----------------------------------------------------------------------------

#[test]
fn test_travel_targets_first_waypoint() {
    let pathfinder = StubPathfinder::new(vec![Waypoint::walk(1.0, 0.0), Waypoint::walk(2.0, 0.0)]);
    let mut controller = LocomotionController::default();

    let result = controller.travel(Vec2::ZERO, Vec2::new(2.0, 0.0), &pathfinder);

    assert_eq!(result, Ok(2));
    assert_eq!(controller.current_target(), Some(&Waypoint::walk(1.0, 0.0)));
    assert_eq!(controller.path().len(), 1);
}

#[test]
fn test_unreachable_travel_leaves_state_unchanged() {
    let reachable = StubPathfinder::new(vec![Waypoint::walk(3.0, 0.0), Waypoint::walk(4.0, 0.0)]);
    let mut controller = LocomotionController::default();
    controller
        .travel(Vec2::ZERO, Vec2::new(4.0, 0.0), &reachable)
        .unwrap();
    let before = controller.clone();

    let result = controller.travel(
        Vec2::ZERO,
        Vec2::new(50.0, 50.0),
        &StubPathfinder::unreachable(),
    );

    assert!(result.is_err());
    assert_eq!(controller.motion(), before.motion());
    assert_eq!(controller.path(), before.path());
}

#[test]
fn test_unreachable_travel_from_idle_issues_no_motion() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let mut controller = LocomotionController::default();

    assert!(controller.travel(Vec2::ZERO, Vec2::new(9.0, 0.0), &pathfinder).is_err());
    let output = controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);

    assert!(controller.is_idle());
    assert_eq!(output.velocity, Vec2::ZERO);
    assert!(!output.drop_through);
}

#[test]
fn test_travel_clears_jump_and_drop_intent() {
    let mut controller = armed_jump(Waypoint::jump(0.0, 2.0, tier(3)), &[]);
    let tuning = NavigationTuning::default();
    let mut blocked = grounded_at(0.0, 0.0);
    blocked.overhead_blocked = true;
    controller.tick(&blocked, &tuning, &StubPathfinder::unreachable(), DT);
    assert!(controller.motion().priming_standing_jump);

    let pathfinder = StubPathfinder::new(vec![Waypoint::walk(5.0, 0.0)]);
    controller
        .travel(Vec2::ZERO, Vec2::new(5.0, 0.0), &pathfinder)
        .unwrap();

    assert!(!controller.motion().jumping);
    assert!(!controller.motion().drop_pending);
    assert!(!controller.motion().priming_standing_jump);
}

// -----------------------------------------------------------------------------
// Steering tests
// -----------------------------------------------------------------------------

#[test]
fn test_steer_direction_with_padding() {
    assert_eq!(steer_direction(5.0, 0.0, 0.1), 1.0);
    assert_eq!(steer_direction(-5.0, 0.0, 0.1), -1.0);
    assert_eq!(steer_direction(0.05, 0.0, 0.1), 0.0);
    assert_eq!(steer_direction(-0.05, 0.0, 0.1), 0.0);
}

#[test]
fn test_tick_walks_toward_target_and_faces_it() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(vec![Waypoint::walk(3.0, 0.0), Waypoint::walk(-3.0, 0.0)]);
    let mut controller = LocomotionController::default();
    controller
        .travel(Vec2::ZERO, Vec2::new(-3.0, 0.0), &pathfinder)
        .unwrap();

    let output = controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(output.velocity.x, tuning.move_speed);
    assert_eq!(controller.motion().facing, Facing::Right);

    let output = controller.tick(&grounded_at(3.0, 0.0), &tuning, &pathfinder, DT);
    let output_after = controller.tick(&grounded_at(3.0, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(output.velocity.x, 0.0);
    assert_eq!(output_after.velocity.x, -tuning.move_speed);
    assert_eq!(controller.motion().facing, Facing::Left);
}

#[test]
fn test_tick_advances_only_when_grounded() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(vec![Waypoint::walk(1.0, 0.0), Waypoint::walk(3.0, 0.0)]);
    let mut controller = LocomotionController::default();
    controller
        .travel(Vec2::ZERO, Vec2::new(3.0, 0.0), &pathfinder)
        .unwrap();

    controller.tick(&airborne_at(1.0, 0.0, -2.0), &tuning, &pathfinder, DT);
    assert_eq!(controller.current_target(), Some(&Waypoint::walk(1.0, 0.0)));

    controller.tick(&grounded_at(1.0, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(controller.current_target(), Some(&Waypoint::walk(3.0, 0.0)));
}

#[test]
fn test_idle_tick_holds_zero_horizontal_speed() {
    let tuning = NavigationTuning::default();
    let mut controller = LocomotionController::default();
    let mut body = grounded_at(0.0, 0.0);
    body.velocity = Vec2::new(3.0, 0.0);

    let output = controller.tick(&body, &tuning, &StubPathfinder::unreachable(), DT);

    assert_eq!(output.velocity.x, 0.0);
}

// -----------------------------------------------------------------------------
// Grounded tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_requires_contact_and_still_vertical_speed() {
    let tuning = NavigationTuning::default();
    assert!(tuning.is_grounded(true, 0.0));
    assert!(tuning.is_grounded(true, -0.04));
    assert!(!tuning.is_grounded(true, 0.2));
    assert!(!tuning.is_grounded(false, 0.0));
}

#[test]
fn test_tuning_delays_never_panic_on_bad_values() {
    let tuning = NavigationTuning {
        recalibrate_after: f32::INFINITY,
        drop_through_duration: f32::NAN,
        ..NavigationTuning::default()
    };
    assert_eq!(tuning.recalibrate_delay(), Duration::MAX);
    assert_eq!(tuning.drop_through_delay(), Duration::ZERO);
    assert_eq!(secs_to_duration(-2.0), Duration::ZERO);
    assert_eq!(secs_to_duration(0.35), Duration::from_secs_f32(0.35));
}

// -----------------------------------------------------------------------------
// Jump selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_standing_jump_uses_table_for_every_tier() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();

    for t in JumpTier::all() {
        for horizontal_speed in [0.0, 2.5, -6.0] {
            let mut controller = armed_jump(Waypoint::jump(0.6, 3.0, t), &[]);
            let mut body = grounded_at(0.0, 0.0);
            body.velocity.x = horizontal_speed;

            let output = controller.tick(&body, &tuning, &pathfinder, DT);

            let expected = tuning.jump_heights.velocity(t).unwrap();
            assert_eq!(output.velocity.y, expected, "tier {}", t.get());
        }
    }
}

#[test]
fn test_far_jump_always_uses_ballistic_solver() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();

    for t in JumpTier::all() {
        let mut controller = armed_jump(Waypoint::jump(3.0, 2.0, t), &[]);

        let output = controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);

        assert_eq!(output.velocity.y, pathfinder.launch.y, "tier {}", t.get());
    }
}

#[test]
fn test_ballistic_launch_carries_walking_speed_toward_target() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();

    let mut rightward = armed_jump(Waypoint::jump(3.0, 2.0, tier(2)), &[]);
    let output = rightward.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(output.velocity.x, tuning.move_speed);
    assert_eq!(rightward.motion().facing, Facing::Right);

    let mut leftward = armed_jump(Waypoint::jump(-3.0, 2.0, tier(2)), &[]);
    let output = leftward.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(output.velocity.x, -tuning.move_speed);
    assert_eq!(leftward.motion().facing, Facing::Left);
}

#[test]
fn test_standing_launch_has_no_horizontal_speed() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let mut controller = armed_jump(Waypoint::jump(0.6, 3.0, tier(3)), &[]);

    let output = controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);

    assert_eq!(output.velocity, Vec2::new(0.0, 8.25));
}

#[test]
fn test_choose_jump_launch_threshold_is_inclusive() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let target = Waypoint::jump(1.0, 2.0, tier(2));

    let at_threshold = choose_jump_launch(&target, Vec2::ZERO, &tuning, &pathfinder, GRAVITY);
    let past_threshold =
        choose_jump_launch(&target, Vec2::new(-0.01, 0.0), &tuning, &pathfinder, GRAVITY);

    assert_eq!(
        at_threshold,
        JumpLaunch::Standing {
            tier: tier(2),
            vertical_velocity: 6.75
        }
    );
    assert_eq!(
        past_threshold,
        JumpLaunch::Ballistic {
            vertical_velocity: 42.0
        }
    );
}

#[test]
fn test_missing_table_entry_falls_back_to_ballistic() {
    let mut tuning = NavigationTuning::default();
    tuning.jump_heights = JumpHeightTable(Default::default());
    let pathfinder = StubPathfinder::unreachable();

    let launch = choose_jump_launch(
        &Waypoint::jump(0.0, 2.0, tier(2)),
        Vec2::ZERO,
        &tuning,
        &pathfinder,
        GRAVITY,
    );

    assert_eq!(launch.vertical_velocity(), 42.0);
}

#[test]
fn test_launch_advances_and_schedules_recalibration() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let next = Waypoint::walk(2.0, 2.0);
    let mut controller = armed_jump(Waypoint::jump(0.5, 2.0, tier(2)), &[next]);

    controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);

    assert!(!controller.motion().jumping);
    assert_eq!(controller.current_target(), Some(&next));
    assert_eq!(controller.pending_recalibrations(), 1);
}

#[test]
fn test_jump_attempt_while_airborne_still_advances() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let next = Waypoint::walk(2.0, 2.0);
    let mut controller = armed_jump(Waypoint::jump(0.5, 2.0, tier(2)), &[next]);

    let output = controller.tick(&airborne_at(0.0, 1.0, -3.0), &tuning, &pathfinder, DT);

    assert_eq!(output.velocity.y, -3.0);
    assert_eq!(controller.current_target(), Some(&next));
}

// -----------------------------------------------------------------------------
// Obstruction and priming tests
// -----------------------------------------------------------------------------

#[test]
fn test_overhead_hit_sidesteps_without_launch() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let target = Waypoint::jump(0.5, 3.0, tier(3));
    let mut controller = armed_jump(target, &[]);
    let mut body = grounded_at(0.0, 0.0);
    body.overhead_blocked = true;

    let output = controller.tick(&body, &tuning, &pathfinder, DT);

    assert_eq!(output.velocity.y, 0.0);
    assert_eq!(output.velocity.x, -tuning.move_speed);
    assert!(controller.motion().priming_standing_jump);
    assert!(controller.motion().jumping);
    assert_eq!(controller.current_target(), Some(&target));
    assert_eq!(controller.pending_recalibrations(), 0);
}

#[test]
fn test_overhead_hit_sidesteps_right_for_target_on_left() {
    let tuning = NavigationTuning::default();
    let mut controller = armed_jump(Waypoint::jump(-0.5, 3.0, tier(3)), &[]);
    let mut body = grounded_at(0.0, 0.0);
    body.overhead_blocked = true;

    let output = controller.tick(&body, &tuning, &StubPathfinder::unreachable(), DT);

    assert_eq!(output.velocity.x, tuning.move_speed);
}

#[test]
fn test_primed_jump_waits_for_launch_to_slow() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let target = Waypoint::jump(0.5, 3.0, tier(3));
    let next = Waypoint::walk(1.5, 3.0);
    let mut controller = armed_jump(target, &[next]);

    let mut blocked = grounded_at(0.0, 0.0);
    blocked.overhead_blocked = true;
    controller.tick(&blocked, &tuning, &pathfinder, DT);

    // Clear overhead: launches at 8.25, still above the release speed
    let output = controller.tick(&grounded_at(-0.4, 0.0), &tuning, &pathfinder, DT);
    assert_eq!(output.velocity.y, 8.25);
    assert!(controller.motion().priming_standing_jump);
    assert_eq!(controller.current_target(), Some(&target));

    // Rising but slowed below the release speed
    controller.tick(&airborne_at(-0.4, 2.0, 5.0), &tuning, &pathfinder, DT);
    assert!(!controller.motion().priming_standing_jump);
    assert!(controller.motion().jumping);

    controller.tick(&airborne_at(-0.4, 2.5, 3.0), &tuning, &pathfinder, DT);
    assert!(!controller.motion().jumping);
    assert_eq!(controller.current_target(), Some(&next));
    assert_eq!(controller.pending_recalibrations(), 1);
}

#[test]
fn test_primed_low_tier_releases_on_launch_tick() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let mut controller = armed_jump(Waypoint::jump(0.5, 1.0, tier(1)), &[]);

    let mut blocked = grounded_at(0.0, 0.0);
    blocked.overhead_blocked = true;
    controller.tick(&blocked, &tuning, &pathfinder, DT);

    let output = controller.tick(&grounded_at(-0.4, 0.0), &tuning, &pathfinder, DT);

    assert_eq!(output.velocity.y, 5.0);
    assert!(!controller.motion().priming_standing_jump);
    assert!(controller.motion().jumping);
}

// -----------------------------------------------------------------------------
// Drop tests
// -----------------------------------------------------------------------------

#[test]
fn test_drop_waypoint_signals_once() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::unreachable();
    let mut controller =
        LocomotionController::with_path(vec![Waypoint::drop_through(3.0, -4.0)].into());
    controller.advance();

    let first = controller.tick(&grounded_at(0.0, 0.0), &tuning, &pathfinder, DT);
    assert!(first.drop_through);
    assert_eq!(first.velocity.x, 0.0);
    assert!(!controller.motion().drop_pending);

    let second = controller.tick(&airborne_at(0.0, -0.5, -1.0), &tuning, &pathfinder, DT);
    assert!(!second.drop_through);
    assert_eq!(second.velocity.x, tuning.move_speed);
}

// -----------------------------------------------------------------------------
// Recalibration tests
// -----------------------------------------------------------------------------

fn stuck_controller(pathfinder: &StubPathfinder) -> LocomotionController {
    let mut controller = LocomotionController::default();
    controller
        .travel(Vec2::ZERO, Vec2::new(9.0, 0.0), pathfinder)
        .unwrap();
    controller
}

fn recalibration_path() -> Vec<Waypoint> {
    vec![
        Waypoint::walk(4.0, 4.0),
        Waypoint::walk(6.0, 4.0),
        Waypoint::walk(9.0, 4.0),
    ]
}

#[test]
fn test_recalibration_replans_when_target_unchanged() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(recalibration_path());
    let mut controller = stuck_controller(&pathfinder);
    controller.schedule_recalibration(tuning.recalibrate_delay());

    // Stuck in the air below the target the whole time
    controller.tick(&airborne_at(0.0, 0.0, -1.0), &tuning, &pathfinder, Duration::from_secs(4));
    assert_eq!(pathfinder.request_count(), 1);

    controller.tick(&airborne_at(0.0, 0.0, -1.0), &tuning, &pathfinder, Duration::from_secs(1));
    assert_eq!(pathfinder.request_count(), 2);

    let destination = pathfinder.last_request().unwrap();
    assert!((destination - Vec2::new(9.0, 3.0)).length() < EPSILON);
    assert_eq!(controller.pending_recalibrations(), 0);
}

#[test]
fn test_recalibration_is_noop_after_progress() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(recalibration_path());
    let mut controller = stuck_controller(&pathfinder);
    controller.schedule_recalibration(tuning.recalibrate_delay());

    controller.advance();
    controller.tick(&airborne_at(0.0, 0.0, -1.0), &tuning, &pathfinder, Duration::from_secs(6));

    assert_eq!(pathfinder.request_count(), 1);
    assert_eq!(controller.current_target(), Some(&Waypoint::walk(6.0, 4.0)));
}

#[test]
fn test_recalibration_is_noop_with_empty_path() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(vec![Waypoint::walk(4.0, 4.0)]);
    let mut controller = stuck_controller(&pathfinder);
    controller.schedule_recalibration(tuning.recalibrate_delay());

    controller.tick(&airborne_at(0.0, 0.0, -1.0), &tuning, &pathfinder, Duration::from_secs(6));

    assert_eq!(pathfinder.request_count(), 1);
}

#[test]
fn test_recalibration_timers_fire_independently() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(recalibration_path());
    let mut controller = stuck_controller(&pathfinder);
    let body = airborne_at(0.0, 0.0, -1.0);

    controller.schedule_recalibration(Duration::from_secs(2));
    controller.tick(&body, &tuning, &pathfinder, Duration::from_secs(1));
    controller.schedule_recalibration(Duration::from_secs(2));
    assert_eq!(controller.pending_recalibrations(), 2);

    // First fires and replans; the replanned target equals the second's snapshot
    controller.tick(&body, &tuning, &pathfinder, Duration::from_secs(1));
    assert_eq!(pathfinder.request_count(), 2);
    assert_eq!(controller.pending_recalibrations(), 1);

    controller.tick(&body, &tuning, &pathfinder, Duration::from_secs(1));
    assert_eq!(pathfinder.request_count(), 3);
    assert_eq!(controller.pending_recalibrations(), 0);
}

#[test]
fn test_new_travel_does_not_cancel_recalibration() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(recalibration_path());
    let mut controller = stuck_controller(&pathfinder);
    controller.schedule_recalibration(Duration::from_secs(2));

    controller
        .travel(Vec2::ZERO, Vec2::new(9.0, 0.0), &pathfinder)
        .unwrap();
    assert_eq!(controller.pending_recalibrations(), 1);

    // The fresh path restarts at the same first waypoint, so the stale check
    // still sees an unchanged target and replans.
    controller.tick(&airborne_at(0.0, 0.0, -1.0), &tuning, &pathfinder, Duration::from_secs(2));
    assert_eq!(pathfinder.request_count(), 3);
}

// -----------------------------------------------------------------------------
// End-to-end scenario
// -----------------------------------------------------------------------------

/// Flat ground at y = 0, no obstacles, explicit Euler integration.
fn simulate_step(body: &mut BodyReadings, velocity: Vec2) {
    let dt = DT.as_secs_f32();
    body.velocity = velocity;
    if body.position.y > 0.0 || body.velocity.y > 0.0 {
        body.velocity.y += GRAVITY * dt;
    }
    body.position += body.velocity * dt;
    if body.position.y <= 0.0 {
        body.position.y = 0.0;
        body.velocity.y = 0.0;
    }
    body.ground_contact = body.position.y <= 0.05;
}

#[test]
fn test_walk_then_standing_jump_scenario() {
    let tuning = NavigationTuning::default();
    let pathfinder = StubPathfinder::new(vec![
        Waypoint::walk(5.0, 0.0),
        Waypoint::jump(5.0, 2.0, tier(3)),
    ]);
    let mut controller = LocomotionController::default();
    let mut body = grounded_at(0.0, 0.0);

    controller
        .travel(body.position, Vec2::new(5.0, 2.0), &pathfinder)
        .unwrap();

    let mut launch = None;
    for _ in 0..200 {
        let output = controller.tick(&body, &tuning, &pathfinder, DT);
        if launch.is_none() && output.velocity.y > 0.0 {
            launch = Some((body.position, output.velocity.y));
        }
        if launch.is_none() {
            assert!(output.velocity.x >= 0.0, "agent should only walk right");
        }
        simulate_step(&mut body, output.velocity);
    }

    let (launch_position, launch_velocity) = launch.expect("agent never jumped");
    assert!((launch_position.x - 5.0).abs() < tuning.min_target_distance);
    assert_eq!(launch_velocity, 8.25);
    assert!(controller.path().is_empty());
    assert!(controller.is_idle());
    assert_eq!(body.position.y, 0.0);
}
