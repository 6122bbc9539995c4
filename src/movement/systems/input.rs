//! Movement domain: click-to-travel, manual calibration control, and facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::movement::systems::collisions::sense_body;
use crate::movement::{
    Agent, Facing, GameLayer, LocomotionController, ManualControl, ManualInput, NavigationTuning,
    TravelRequest,
};
use crate::passthrough::PlatformPassthrough;

/// How far below the cursor the ground raycast searches.
const CLICK_RAY_LENGTH: f32 = 1000.0;

/// Left click drops a ray from the cursor onto the ground below it and sends
/// every grounded automated agent toward the hit point.
pub(crate) fn click_to_travel(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    spatial_query: SpatialQuery,
    tuning: Res<NavigationTuning>,
    agents: Query<(Entity, &LocomotionController), (With<Agent>, Without<ManualControl>)>,
    mut requests: MessageWriter<TravelRequest>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(cursor) = windows.iter().next().and_then(Window::cursor_position) else {
        return;
    };
    let Some(world_point) = cameras
        .iter()
        .find_map(|(camera, transform)| camera.viewport_to_world_2d(transform, cursor).ok())
    else {
        return;
    };

    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::WALKABLE);
    let Some(hit) = spatial_query.cast_ray(
        world_point,
        Dir2::NEG_Y,
        CLICK_RAY_LENGTH,
        true,
        &ground_filter,
    ) else {
        debug!("[INPUT] Click at {} has no ground below it", world_point);
        return;
    };

    // Aim just under the surface so the nearest path cell is the one on it
    let destination =
        world_point - Vec2::Y * hit.distance - Vec2::Y * tuning.click_drop_offset;

    for (agent, controller) in &agents {
        if controller.motion().grounded {
            requests.write(TravelRequest { agent, destination });
        }
    }
}

/// Tab toggles keyboard control of every agent.
pub(crate) fn toggle_manual_control(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    agents: Query<(Entity, Has<ManualControl>), With<Agent>>,
) {
    if !keyboard.just_pressed(KeyCode::Tab) {
        return;
    }

    for (agent, manual) in &agents {
        if manual {
            info!("[INPUT] {:?} back on automated locomotion", agent);
            commands.entity(agent).remove::<ManualControl>();
        } else {
            info!("[INPUT] {:?} under manual control", agent);
            commands.entity(agent).insert(ManualControl);
        }
    }
}

pub(crate) fn read_manual_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<ManualInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        x += 1.0;
    }
    input.axis = x;

    if keyboard.just_pressed(KeyCode::Space) {
        if keyboard.pressed(KeyCode::KeyS) {
            input.drop_requested = true;
        } else {
            input.jump_requested = true;
        }
    }
}

/// Walk, jump at the manual jump velocity, and drop through platforms.
/// Used for measuring jump heights.
pub(crate) fn apply_manual_control(
    mut input: ResMut<ManualInput>,
    tuning: Res<NavigationTuning>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut agents: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut LinearVelocity,
            &mut PlatformPassthrough,
        ),
        (With<Agent>, With<ManualControl>),
    >,
) {
    let jump_requested = std::mem::take(&mut input.jump_requested);
    let drop_requested = std::mem::take(&mut input.drop_requested);

    for (agent, transform, collider, mut velocity, mut passthrough) in &mut agents {
        velocity.x = input.axis * tuning.move_speed;

        if drop_requested {
            if let Some(platform) = passthrough.drop_through_current_platform() {
                info!("[PLATFORM] {:?} dropping through {:?}", agent, platform);
            }
        }

        if jump_requested {
            let readings = sense_body(
                &spatial_query,
                transform,
                collider,
                velocity.0,
                &passthrough,
                &tuning,
                gravity.0.y,
            );
            if tuning.is_grounded(readings.ground_contact, readings.velocity.y) {
                velocity.y = tuning.manual_jump_velocity;
            }
        }
    }
}

/// Sprites face left by default.
pub(crate) fn update_facing_sprite(
    mut agents: Query<(&LocomotionController, &mut Sprite), With<Agent>>,
) {
    for (controller, mut sprite) in &mut agents {
        sprite.flip_x = controller.motion().facing == Facing::Right;
    }
}
