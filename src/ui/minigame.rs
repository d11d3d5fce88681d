//! UI domain: mini-game side panel and the all-completed prompt.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ChallengeSession, FlowCommand};
use crate::flow::{ChallengeFlow, FlowEvent, FlowView};
use crate::ui::widgets::{
    FlowButton, MUTED_TEXT_COLOR, PANEL_COLOR, TEXT_COLOR, TINT_COLOR, button_node, enter_pressed,
    label, spawn_flow_button,
};

pub const MINIGAME_PANEL_WIDTH: f32 = 380.0;

/// Marker for the mini-game panel root
#[derive(Component, Debug)]
pub struct MiniGameUI;

/// Marker for the completion prompt overlay
#[derive(Component, Debug)]
pub struct MiniGamePromptUI;

/// Text nodes refreshed from the session
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniGameStat {
    TotalPoints,
    ScenariosCompleted,
    NextScenarioLabel,
}

impl MiniGameStat {
    fn text(self, flow: &ChallengeFlow) -> String {
        match self {
            MiniGameStat::TotalPoints => flow.score().to_string(),
            MiniGameStat::ScenariosCompleted => {
                format!("{}/{}", flow.completed_count(), flow.scenarios().len())
            }
            MiniGameStat::NextScenarioLabel => {
                if flow.all_completed() {
                    "All Scenarios Completed".to_string()
                } else {
                    "Start Next Scenario".to_string()
                }
            }
        }
    }
}

pub(crate) fn spawn_minigame_ui(mut commands: Commands, session: Res<ChallengeSession>) {
    let flow = &session.flow;

    commands
        .spawn((
            MiniGameUI,
            Node {
                width: Val::Px(MINIGAME_PANEL_WIDTH),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            BackgroundColor(PANEL_COLOR.with_alpha(0.95)),
        ))
        .with_children(|panel| {
            panel.spawn((
                label("Empathy Game", 32.0, TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(6.0)),
                    ..default()
                },
            ));
            panel.spawn((
                label(
                    "Collect empathy points by making good choices!",
                    15.0,
                    MUTED_TEXT_COLOR,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));
            panel.spawn((
                label(
                    "In this game, you'll face various scenarios that test your empathy and understanding of different perspectives.",
                    14.0,
                    TEXT_COLOR,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(12.0)),
                    ..default()
                },
            ));
            panel.spawn((
                label(
                    "Every point you earn releases a bubble. Touch or click and drag to push them around.",
                    14.0,
                    MUTED_TEXT_COLOR,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            spawn_stat_row(panel, "Total Empathy Points:", MiniGameStat::TotalPoints, flow);
            spawn_stat_row(
                panel,
                "Scenarios Completed:",
                MiniGameStat::ScenariosCompleted,
                flow,
            );

            // Label text changes once every scenario is completed
            panel
                .spawn((
                    FlowButton {
                        event: FlowEvent::StartNextScenario,
                    },
                    button_node(Color::srgb(1.0, 0.42, 0.42)),
                ))
                .with_child((
                    MiniGameStat::NextScenarioLabel,
                    label(
                        MiniGameStat::NextScenarioLabel.text(flow),
                        18.0,
                        Color::WHITE,
                    ),
                ));

            spawn_flow_button(
                panel,
                "Back to Scenarios",
                FlowEvent::BackToList,
                MUTED_TEXT_COLOR,
            );
        });
}

fn spawn_stat_row(
    parent: &mut ChildSpawnerCommands,
    title: &str,
    stat: MiniGameStat,
    flow: &ChallengeFlow,
) {
    parent
        .spawn((Node {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            margin: UiRect::bottom(Val::Px(8.0)),
            ..default()
        },))
        .with_children(|row| {
            row.spawn(label(title.to_string(), 16.0, MUTED_TEXT_COLOR));
            row.spawn((stat, label(stat.text(flow), 16.0, TINT_COLOR)));
        });
}

pub(crate) fn update_minigame_stats(
    session: Res<ChallengeSession>,
    mut query: Query<(&MiniGameStat, &mut Text)>,
) {
    if !session.is_changed() {
        return;
    }

    for (stat, mut text) in &mut query {
        **text = stat.text(&session.flow);
    }
}

/// Show the reset/return prompt while the flow is in `MiniGamePrompt`.
pub(crate) fn sync_minigame_prompt(
    mut commands: Commands,
    session: Res<ChallengeSession>,
    existing: Query<Entity, With<MiniGamePromptUI>>,
) {
    if !session.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    if *session.flow.view() != FlowView::MiniGamePrompt {
        return;
    }

    commands
        .spawn((
            MiniGamePromptUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(420.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(24.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|modal| {
                    modal.spawn((
                        label("All Scenarios Completed", 22.0, TEXT_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(12.0)),
                            ..default()
                        },
                    ));
                    modal.spawn(label(
                        "You have completed all available scenarios. Would you like to reset and play again?",
                        16.0,
                        MUTED_TEXT_COLOR,
                    ));
                    spawn_flow_button(modal, "Reset Game", FlowEvent::ResetGame, TINT_COLOR);
                    spawn_flow_button(
                        modal,
                        "Back to Menu",
                        FlowEvent::BackToList,
                        MUTED_TEXT_COLOR,
                    );
                });
        });
}

pub(crate) fn cleanup_minigame_ui(
    mut commands: Commands,
    query: Query<Entity, Or<(With<MiniGameUI>, With<MiniGamePromptUI>)>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_minigame_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<ChallengeSession>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    let event = match session.flow.view() {
        FlowView::MiniGame if enter_pressed(&keyboard) => FlowEvent::StartNextScenario,
        FlowView::MiniGamePrompt if keyboard.just_pressed(KeyCode::KeyR) => FlowEvent::ResetGame,
        FlowView::MiniGame | FlowView::MiniGamePrompt
            if keyboard.just_pressed(KeyCode::Escape) =>
        {
            FlowEvent::BackToList
        }
        _ => return,
    };
    flow_commands.write(FlowCommand(event));
}
