//! Core domain: challenge session, screen state and flow command handling.

mod events;
mod resources;
mod state;
mod systems;
pub mod ui;

pub use events::{FlowCommand, GameCompletedEvent, PointsAwardedEvent, SessionResetEvent};
pub use resources::{ChallengeConfig, ChallengeSession, PromptMessage, ValidationPrompt};
pub use state::ChallengeView;

use bevy::prelude::*;

use crate::core::systems::{apply_flow_commands, initialize_session, setup_camera};
use crate::core::ui::character_creation::{
    NameEntry, cleanup_character_creation_ui, handle_create_button, handle_name_typing,
    handle_prompt_dismiss, spawn_character_creation_ui, sync_validation_prompt,
    update_name_display,
};
use crate::core::ui::game_complete::{
    cleanup_game_complete_screen, handle_game_complete_input, spawn_game_complete_screen,
};

/// Per-frame ordering: input writes commands, the flow applies them, views
/// redraw from the new session.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowSystems {
    Input,
    Apply,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ChallengeView>()
            .init_resource::<ChallengeConfig>()
            .init_resource::<ValidationPrompt>()
            .init_resource::<NameEntry>()
            .add_message::<FlowCommand>()
            .add_message::<PointsAwardedEvent>()
            .add_message::<SessionResetEvent>()
            .add_message::<GameCompletedEvent>()
            .configure_sets(
                Update,
                (
                    FlowSystems::Input,
                    FlowSystems::Apply,
                    FlowSystems::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_camera, initialize_session))
            .add_systems(Update, apply_flow_commands.in_set(FlowSystems::Apply))
            // Character creation
            .add_systems(
                OnEnter(ChallengeView::CharacterCreation),
                spawn_character_creation_ui,
            )
            .add_systems(
                OnExit(ChallengeView::CharacterCreation),
                cleanup_character_creation_ui,
            )
            .add_systems(
                Update,
                (
                    handle_name_typing,
                    handle_create_button,
                    handle_prompt_dismiss,
                )
                    .chain()
                    .in_set(FlowSystems::Input)
                    .run_if(in_state(ChallengeView::CharacterCreation)),
            )
            .add_systems(
                Update,
                (update_name_display, sync_validation_prompt)
                    .in_set(FlowSystems::Present)
                    .run_if(in_state(ChallengeView::CharacterCreation)),
            )
            // Game complete
            .add_systems(
                OnEnter(ChallengeView::GameComplete),
                spawn_game_complete_screen,
            )
            .add_systems(
                OnExit(ChallengeView::GameComplete),
                cleanup_game_complete_screen,
            )
            .add_systems(
                Update,
                handle_game_complete_input
                    .in_set(FlowSystems::Input)
                    .run_if(in_state(ChallengeView::GameComplete)),
            );
    }
}
