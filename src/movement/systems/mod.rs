//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use input::{
    apply_manual_control, click_to_travel, read_manual_input, toggle_manual_control,
    update_facing_sprite,
};
pub(crate) use locomotion::{apply_travel_requests, drive_locomotion};
