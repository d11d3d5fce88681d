//! UI domain: scenario list with the character header.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bubbles::BUBBLE_COLORS;
use crate::core::{ChallengeSession, FlowCommand};
use crate::flow::{
    ChallengeFlow, FlowEvent, FlowView, Scenario, avatar_initial, avatar_palette_index,
};
use crate::ui::widgets::{
    BACKGROUND_COLOR, ButtonColors, FlowButton, MUTED_TEXT_COLOR, PANEL_COLOR, TEXT_COLOR,
    hex_color, label, pressed_digit, spawn_flow_button,
};

/// Characters of the description shown on a card
const PREVIEW_CHARS: usize = 100;

/// Marker for the scenario list UI root
#[derive(Component, Debug)]
pub struct ScenarioListUI;

/// Rebuild the list whenever the session changes while it is showing.
pub(crate) fn sync_scenario_list_ui(
    mut commands: Commands,
    session: Res<ChallengeSession>,
    existing: Query<Entity, With<ScenarioListUI>>,
) {
    if !session.is_changed() && !existing.is_empty() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    if *session.flow.view() != FlowView::ScenarioList {
        return;
    }
    spawn_scenario_list_ui(&mut commands, &session.flow);
}

fn spawn_scenario_list_ui(commands: &mut Commands, flow: &ChallengeFlow) {
    commands
        .spawn((
            ScenarioListUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(24.0)),
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
        ))
        .with_children(|parent| {
            // Character header
            if let Some(character) = flow.character() {
                let badge_color = hex_color(
                    BUBBLE_COLORS[avatar_palette_index(&character.name, BUBBLE_COLORS.len())],
                );

                parent
                    .spawn((Node {
                        width: Val::Px(640.0),
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(16.0),
                        margin: UiRect::bottom(Val::Px(24.0)),
                        ..default()
                    },))
                    .with_children(|header| {
                        // Avatar badge stands in for the generated image
                        header
                            .spawn((
                                Node {
                                    width: Val::Px(64.0),
                                    height: Val::Px(64.0),
                                    justify_content: JustifyContent::Center,
                                    align_items: AlignItems::Center,
                                    ..default()
                                },
                                BackgroundColor(badge_color),
                            ))
                            .with_child(label(avatar_initial(&character.name), 28.0, Color::WHITE));

                        header
                            .spawn((Node {
                                flex_direction: FlexDirection::Column,
                                ..default()
                            },))
                            .with_children(|details| {
                                details.spawn(label(character.name.clone(), 22.0, TEXT_COLOR));
                                details.spawn(label(
                                    format!("Empathy Points: {}", flow.score()),
                                    16.0,
                                    MUTED_TEXT_COLOR,
                                ));
                            });
                    });
            }

            parent.spawn((
                label("Available Scenarios", 24.0, TEXT_COLOR),
                Node {
                    width: Val::Px(640.0),
                    margin: UiRect::bottom(Val::Px(12.0)),
                    ..default()
                },
            ));

            for (index, scenario) in flow.scenarios().iter().enumerate() {
                spawn_scenario_card(parent, index, scenario);
            }

            spawn_flow_button(
                parent,
                "Play Empathy Game",
                FlowEvent::OpenMiniGame,
                Color::srgb(0.23, 0.35, 0.6),
            );

            parent.spawn((
                label(
                    "Press 1-5 to open a scenario, G for the game",
                    14.0,
                    MUTED_TEXT_COLOR,
                ),
                Node {
                    margin: UiRect::top(Val::Px(12.0)),
                    ..default()
                },
            ));
        });
}

fn spawn_scenario_card(parent: &mut ChildSpawnerCommands, index: usize, scenario: &Scenario) {
    let accent = hex_color(&scenario.color);
    let idle = if scenario.completed {
        Color::srgb(0.93, 0.94, 0.96)
    } else {
        PANEL_COLOR
    };

    parent
        .spawn((
            FlowButton {
                event: FlowEvent::OpenScenario(index),
            },
            Button,
            Node {
                width: Val::Px(640.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(14.0)),
                margin: UiRect::bottom(Val::Px(10.0)),
                border: UiRect::left(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(idle),
            BorderColor::all(accent),
            ButtonColors {
                idle,
                hovered: Color::srgb(0.9, 0.95, 1.0),
            },
        ))
        .with_children(|card| {
            card.spawn((Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                margin: UiRect::bottom(Val::Px(6.0)),
                ..default()
            },))
                .with_children(|row| {
                    row.spawn(label(
                        format!("[{}] {}", index + 1, scenario.title),
                        18.0,
                        TEXT_COLOR,
                    ));
                    if scenario.completed {
                        row.spawn(label("Completed", 14.0, accent));
                    }
                });

            card.spawn(label(scenario.preview(PREVIEW_CHARS), 14.0, MUTED_TEXT_COLOR));

            if scenario.completed {
                card.spawn((
                    label(
                        format!("Empathy Points: {}", scenario.empathy_points),
                        14.0,
                        accent,
                    ),
                    Node {
                        margin: UiRect::top(Val::Px(6.0)),
                        ..default()
                    },
                ));
            }
        });
}

pub(crate) fn cleanup_scenario_list_ui(
    mut commands: Commands,
    query: Query<Entity, With<ScenarioListUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_scenario_list_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<ChallengeSession>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    if let Some(index) = pressed_digit(&keyboard) {
        if index < session.flow.scenarios().len() {
            flow_commands.write(FlowCommand(FlowEvent::OpenScenario(index)));
        }
    } else if keyboard.just_pressed(KeyCode::KeyG) {
        flow_commands.write(FlowCommand(FlowEvent::OpenMiniGame));
    }
}
