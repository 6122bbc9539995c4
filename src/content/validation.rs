//! Validation for loaded tuning and level content.

use super::data::{LEVEL_SCHEMA_VERSION, LevelDef};
use crate::movement::NavigationTuning;
use crate::navigation::{JumpTier, WaypointIntent};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr $(,)?) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("expected a finite positive value, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr $(,)?) => {
        if !($value.is_finite() && $value >= 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("expected a finite non-negative value, got {}", $value),
            });
        }
    };
}

/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &NavigationTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "navigation";

    check_positive!(errors, "Tuning", id, "move_speed", tuning.move_speed);
    check_positive!(errors, "Tuning", id, "min_target_distance", tuning.min_target_distance);
    check_positive!(errors, "Tuning", id, "ground_check_width", tuning.ground_check_width);
    check_positive!(errors, "Tuning", id, "ground_check_height", tuning.ground_check_height);
    check_positive!(
        errors,
        "Tuning",
        id,
        "overhead_probe_distance",
        tuning.overhead_probe_distance,
    );
    check_positive!(errors, "Tuning", id, "recalibrate_after", tuning.recalibrate_after);
    check_positive!(errors, "Tuning", id, "drop_through_duration", tuning.drop_through_duration);
    check_positive!(errors, "Tuning", id, "manual_jump_velocity", tuning.manual_jump_velocity);

    check_non_negative!(errors, "Tuning", id, "padding", tuning.padding);
    check_non_negative!(
        errors,
        "Tuning",
        id,
        "grounded_speed_epsilon",
        tuning.grounded_speed_epsilon,
    );
    check_non_negative!(errors, "Tuning", id, "standing_jump_max_dx", tuning.standing_jump_max_dx);
    check_non_negative!(
        errors,
        "Tuning",
        id,
        "priming_release_speed",
        tuning.priming_release_speed,
    );
    check_non_negative!(errors, "Tuning", id, "recalibrate_drop", tuning.recalibrate_drop);
    check_non_negative!(errors, "Tuning", id, "click_drop_offset", tuning.click_drop_offset);

    for tier in JumpTier::all() {
        match tuning.jump_heights.velocity(tier) {
            Some(velocity) => {
                check_positive!(errors, "Tuning", id, "jump_heights", velocity);
            }
            None => errors.push(ValidationError {
                source_type: "Tuning",
                source_id: id.to_string(),
                field: "jump_heights",
                problem: format!("missing tier {}", tier.get()),
            }),
        }
    }

    for key in tuning.jump_heights.0.keys() {
        if JumpTier::new(*key).is_none() {
            errors.push(ValidationError {
                source_type: "Tuning",
                source_id: id.to_string(),
                field: "jump_heights",
                problem: format!("tier {} is outside 1..=5", key),
            });
        }
    }

    errors
}

/// Returns a list of validation errors, empty if the level can be spawned.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "level";

    if level.schema_version != LEVEL_SCHEMA_VERSION {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: id.to_string(),
            field: "schema_version",
            problem: format!(
                "expected {}, got {}",
                LEVEL_SCHEMA_VERSION, level.schema_version
            ),
        });
    }

    check_positive!(errors, "Level", id, "cell_size", level.cell_size);
    check_positive!(errors, "Level", id, "snap_radius", level.snap_radius);
    check_positive!(errors, "Level", id, "agent_size.0", level.agent_size.0);
    check_positive!(errors, "Level", id, "agent_size.1", level.agent_size.1);

    for (index, block) in level.blocks.iter().enumerate() {
        if block.min.0 > block.max.0 || block.min.1 > block.max.1 {
            errors.push(ValidationError {
                source_type: "Block",
                source_id: index.to_string(),
                field: "min",
                problem: format!("{:?} is not below-left of {:?}", block.min, block.max),
            });
        }
    }

    for (index, platform) in level.platforms.iter().enumerate() {
        if platform.from > platform.to {
            errors.push(ValidationError {
                source_type: "Platform",
                source_id: index.to_string(),
                field: "from",
                problem: format!("{} is right of {}", platform.from, platform.to),
            });
        }
        check_positive!(errors, "Platform", index, "thickness", platform.thickness);
    }

    if level.routes.is_empty() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: id.to_string(),
            field: "routes",
            problem: "no routes defined".to_string(),
        });
    }

    for route in &level.routes {
        if route.cells.is_empty() {
            errors.push(ValidationError {
                source_type: "Route",
                source_id: route.name.clone(),
                field: "cells",
                problem: "route has no cells".to_string(),
            });
        }
        for cell in &route.cells {
            if let Err(e) = WaypointIntent::from_tag(cell.tag) {
                errors.push(ValidationError {
                    source_type: "Route",
                    source_id: route.name.clone(),
                    field: "cells.tag",
                    problem: e.to_string(),
                });
            }
        }
    }

    if let Some(wander) = &level.wander {
        check_positive!(errors, "Level", id, "wander.idle_secs", wander.idle_secs);
    }

    errors
}
