//! Dev tools for fast iteration on the challenge flow.
//!
//! Features:
//! - F1: dump the session as JSON to the log
//! - F2: answer every open scenario with its best choice

mod systems;
#[cfg(test)]
mod tests;

pub use systems::autoplay_commands;

use bevy::prelude::*;

use crate::core::FlowSystems;
use crate::debug::systems::{handle_debug_hotkeys, sync_debug_status, update_status_message};

/// Resource tracking dev-tool feedback
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Message shown in the corner until its timer runs out
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Marker for status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys.in_set(FlowSystems::Input))
            .add_systems(
                Update,
                (update_status_message, sync_debug_status)
                    .chain()
                    .in_set(FlowSystems::Present),
            );
    }
}
