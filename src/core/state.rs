//! Core domain: screen state for the challenge flow.

use bevy::prelude::*;

use crate::flow::FlowView;

/// Which screen is on display. Coarser than `FlowView`: scenario detail and
/// feedback share one screen, as do the mini-game and its prompt.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum ChallengeView {
    #[default]
    Boot,
    CharacterCreation,
    ScenarioList,
    Scenario,
    GameComplete,
    MiniGame,
}

impl ChallengeView {
    pub fn for_flow(view: &FlowView) -> Self {
        match view {
            FlowView::CharacterCreation => ChallengeView::CharacterCreation,
            FlowView::ScenarioList => ChallengeView::ScenarioList,
            FlowView::ScenarioActive { .. } | FlowView::ScenarioFeedback { .. } => {
                ChallengeView::Scenario
            }
            FlowView::GameComplete => ChallengeView::GameComplete,
            FlowView::MiniGame | FlowView::MiniGamePrompt => ChallengeView::MiniGame,
        }
    }
}
