//! Movement domain: ground and overhead probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyReadings, GameLayer, NavigationTuning, body_half_extents};
use crate::passthrough::PlatformPassthrough;

/// Probe the world around a body and package what the controller needs.
pub(crate) fn sense_body(
    spatial_query: &SpatialQuery,
    transform: &Transform,
    collider: &Collider,
    velocity: Vec2,
    passthrough: &PlatformPassthrough,
    tuning: &NavigationTuning,
    gravity_y: f32,
) -> BodyReadings {
    // Platforms being dropped through must not count as ground or ceiling
    let filter = SpatialQueryFilter::from_mask(GameLayer::WALKABLE)
        .with_excluded_entities(passthrough.suppressed_platforms());
    let position = transform.translation.truncate();
    let half_extents = body_half_extents(collider);

    BodyReadings {
        position,
        velocity,
        ground_contact: detect_ground(spatial_query, position, half_extents, tuning, &filter),
        overhead_blocked: detect_overhead(spatial_query, position, half_extents, tuning, &filter),
        gravity_y,
    }
}

/// Overlap box centered on the feet.
fn detect_ground(
    spatial_query: &SpatialQuery,
    position: Vec2,
    half_extents: Vec2,
    tuning: &NavigationTuning,
    filter: &SpatialQueryFilter,
) -> bool {
    let feet = position - Vec2::new(0.0, half_extents.y);
    let probe = Collider::rectangle(tuning.ground_check_width, tuning.ground_check_height);

    !spatial_query
        .shape_intersections(&probe, feet, 0.0, filter)
        .is_empty()
}

/// Box cast of the body's bounds straight up.
fn detect_overhead(
    spatial_query: &SpatialQuery,
    position: Vec2,
    half_extents: Vec2,
    tuning: &NavigationTuning,
    filter: &SpatialQueryFilter,
) -> bool {
    // Slightly narrower than the body so a wall alongside is not a ceiling
    let probe = Collider::rectangle(half_extents.x * 1.9, half_extents.y * 2.0);
    let config = ShapeCastConfig {
        ignore_origin_penetration: true,
        ..ShapeCastConfig::from_max_distance(tuning.overhead_probe_distance)
    };

    spatial_query
        .cast_shape(&probe, position, 0.0, Dir2::Y, &config, filter)
        .is_some()
}
