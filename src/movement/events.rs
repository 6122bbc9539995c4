//! Movement domain: messages into the locomotion controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fire-and-forget request to send `agent` to `destination`.
#[derive(Debug, Clone, Copy)]
pub struct TravelRequest {
    pub agent: Entity,
    pub destination: Vec2,
}

impl Message for TravelRequest {}
