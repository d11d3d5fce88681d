//! Core domain: messages into and out of the challenge flow.

use bevy::ecs::message::Message;

use crate::flow::FlowEvent;

/// User input for the flow. Every screen writes these; only
/// `apply_flow_commands` reads them.
#[derive(Debug, Clone)]
pub struct FlowCommand(pub FlowEvent);

impl Message for FlowCommand {}

/// Event fired when a choice is recorded
#[derive(Debug)]
pub struct PointsAwardedEvent {
    pub scenario_index: usize,
    pub points: u32,
}

impl Message for PointsAwardedEvent {}

/// Event fired when the catalog and score are reset
#[derive(Debug)]
pub struct SessionResetEvent;

impl Message for SessionResetEvent {}

/// Event fired when the last scenario is acknowledged
#[derive(Debug)]
pub struct GameCompletedEvent {
    pub total_points: u32,
}

impl Message for GameCompletedEvent {}
