//! UI domain: scenario list, scenario detail and mini-game screens.

mod minigame;
mod scenario;
mod scenario_list;
pub mod widgets;

pub use minigame::MINIGAME_PANEL_WIDTH;

use bevy::prelude::*;

use crate::core::{ChallengeView, FlowSystems};
use crate::ui::minigame::{
    cleanup_minigame_ui, handle_minigame_keys, spawn_minigame_ui, sync_minigame_prompt,
    update_minigame_stats,
};
use crate::ui::scenario::{cleanup_scenario_screen, handle_scenario_keys, sync_scenario_screen};
use crate::ui::scenario_list::{
    cleanup_scenario_list_ui, handle_scenario_list_keys, sync_scenario_list_ui,
};
use crate::ui::widgets::{handle_flow_buttons, highlight_plain_buttons};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_flow_buttons, highlight_plain_buttons).in_set(FlowSystems::Input),
        )
        // Scenario list
        .add_systems(OnExit(ChallengeView::ScenarioList), cleanup_scenario_list_ui)
        .add_systems(
            Update,
            (
                handle_scenario_list_keys.in_set(FlowSystems::Input),
                sync_scenario_list_ui.in_set(FlowSystems::Present),
            )
                .run_if(in_state(ChallengeView::ScenarioList)),
        )
        // Scenario detail and feedback
        .add_systems(OnExit(ChallengeView::Scenario), cleanup_scenario_screen)
        .add_systems(
            Update,
            (
                handle_scenario_keys.in_set(FlowSystems::Input),
                sync_scenario_screen.in_set(FlowSystems::Present),
            )
                .run_if(in_state(ChallengeView::Scenario)),
        )
        // Mini-game
        .add_systems(OnEnter(ChallengeView::MiniGame), spawn_minigame_ui)
        .add_systems(OnExit(ChallengeView::MiniGame), cleanup_minigame_ui)
        .add_systems(
            Update,
            (
                handle_minigame_keys.in_set(FlowSystems::Input),
                (update_minigame_stats, sync_minigame_prompt).in_set(FlowSystems::Present),
            )
                .run_if(in_state(ChallengeView::MiniGame)),
        );
    }
}
