//! UI domain: scenario detail, choices and feedback.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ChallengeSession, FlowCommand};
use crate::flow::{ChallengeFlow, Choice, FlowEvent, FlowView, Scenario};
use crate::ui::widgets::{
    BACKGROUND_COLOR, ButtonColors, FlowButton, MUTED_TEXT_COLOR, PANEL_COLOR, TEXT_COLOR,
    enter_pressed, hex_color, label, pressed_digit, spawn_flow_button,
};

/// Marker for the scenario screen UI root
#[derive(Component, Debug)]
pub struct ScenarioScreenUI;

/// Rebuild the screen whenever the session moves (answer, advance).
pub(crate) fn sync_scenario_screen(
    mut commands: Commands,
    session: Res<ChallengeSession>,
    existing: Query<Entity, With<ScenarioScreenUI>>,
) {
    if !session.is_changed() && !existing.is_empty() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let flow = &session.flow;
    let Some(index) = flow.active_index() else {
        return;
    };
    let Some(scenario) = flow.scenario(index) else {
        return;
    };

    spawn_scenario_screen(&mut commands, flow, index, scenario);
}

fn spawn_scenario_screen(
    commands: &mut Commands,
    flow: &ChallengeFlow,
    index: usize,
    scenario: &Scenario,
) {
    let accent = hex_color(&scenario.color);

    commands
        .spawn((
            ScenarioScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(680.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderColor::all(accent),
                ))
                .with_children(|card| {
                    // Header
                    card.spawn((Node {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        margin: UiRect::bottom(Val::Px(16.0)),
                        ..default()
                    },))
                        .with_children(|header| {
                            header.spawn(label(scenario.title.clone(), 24.0, accent));
                            header.spawn(label(
                                format!("Empathy Points: {}", flow.score()),
                                16.0,
                                MUTED_TEXT_COLOR,
                            ));
                        });

                    card.spawn((
                        label(scenario.description.clone(), 16.0, TEXT_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(20.0)),
                            ..default()
                        },
                    ));

                    match flow.view() {
                        FlowView::ScenarioFeedback { choice_id, .. } => {
                            if let Some(choice) = scenario.choice(choice_id) {
                                spawn_feedback(card, choice, accent);
                            }
                            let next_label = if flow.is_last(index) {
                                "Finish Game"
                            } else {
                                "Next Scenario"
                            };
                            spawn_flow_button(card, next_label, FlowEvent::Advance, accent);
                        }
                        _ => match scenario.selected() {
                            // Completed earlier; show the recorded result
                            Some(choice) => {
                                card.spawn((
                                    label(
                                        "You have already answered this scenario.",
                                        14.0,
                                        MUTED_TEXT_COLOR,
                                    ),
                                    Node {
                                        margin: UiRect::bottom(Val::Px(8.0)),
                                        ..default()
                                    },
                                ));
                                spawn_feedback(card, choice, accent);
                            }
                            None => {
                                for (n, choice) in scenario.choices.iter().enumerate() {
                                    spawn_choice_button(card, n, choice, accent);
                                }
                            }
                        },
                    }

                    spawn_flow_button(
                        card,
                        "Back to Scenarios",
                        FlowEvent::BackToList,
                        MUTED_TEXT_COLOR,
                    );
                });
        });
}

fn spawn_choice_button(
    parent: &mut ChildSpawnerCommands,
    number: usize,
    choice: &Choice,
    accent: Color,
) {
    let hovered = accent.with_alpha(0.15);
    parent
        .spawn((
            FlowButton {
                event: FlowEvent::SelectChoice(choice.id.clone()),
            },
            Button,
            Node {
                padding: UiRect::all(Val::Px(14.0)),
                margin: UiRect::bottom(Val::Px(10.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            BorderColor::all(accent),
            ButtonColors {
                idle: PANEL_COLOR,
                hovered,
            },
        ))
        .with_child(label(
            format!("[{}] {}", number + 1, choice.text),
            16.0,
            TEXT_COLOR,
        ));
}

fn spawn_feedback(parent: &mut ChildSpawnerCommands, choice: &Choice, accent: Color) {
    parent.spawn(label("Your Choice:", 16.0, TEXT_COLOR));
    parent.spawn((
        label(choice.text.clone(), 16.0, MUTED_TEXT_COLOR),
        Node {
            margin: UiRect::bottom(Val::Px(12.0)),
            ..default()
        },
    ));
    parent.spawn(label("Feedback:", 16.0, TEXT_COLOR));
    parent.spawn((
        label(choice.feedback.clone(), 16.0, MUTED_TEXT_COLOR),
        Node {
            margin: UiRect::bottom(Val::Px(12.0)),
            ..default()
        },
    ));
    parent.spawn(label(
        format!("Empathy Points Earned: {}", choice.empathy_points),
        18.0,
        accent,
    ));
}

pub(crate) fn cleanup_scenario_screen(
    mut commands: Commands,
    query: Query<Entity, With<ScenarioScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_scenario_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<ChallengeSession>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    let flow = &session.flow;

    if keyboard.just_pressed(KeyCode::Escape) {
        flow_commands.write(FlowCommand(FlowEvent::BackToList));
        return;
    }

    match flow.view() {
        FlowView::ScenarioActive { index } => {
            let Some(scenario) = flow.scenario(*index) else {
                return;
            };
            if scenario.completed {
                return;
            }
            if let Some(choice) = pressed_digit(&keyboard).and_then(|n| scenario.choices.get(n)) {
                flow_commands.write(FlowCommand(FlowEvent::SelectChoice(choice.id.clone())));
            }
        }
        FlowView::ScenarioFeedback { .. } if enter_pressed(&keyboard) => {
            flow_commands.write(FlowCommand(FlowEvent::Advance));
        }
        _ => {}
    }
}
