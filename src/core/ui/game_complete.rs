//! Core domain: game complete summary and play-again input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ChallengeSession, FlowCommand};
use crate::flow::FlowEvent;
use crate::ui::widgets::{
    MUTED_TEXT_COLOR, TINT_COLOR, enter_pressed, hex_color, label, spawn_flow_button,
};

/// Marker for the game complete UI root
#[derive(Component, Debug)]
pub struct GameCompleteUI;

pub(crate) fn spawn_game_complete_screen(mut commands: Commands, session: Res<ChallengeSession>) {
    let flow = &session.flow;
    let title_color = Color::srgb(0.95, 0.7, 0.2);

    commands
        .spawn((
            GameCompleteUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.05, 0.1, 0.92)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                label("Congratulations!", 56.0, title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            parent.spawn((
                label(
                    format!(
                        "You've completed all scenarios with {} empathy points!",
                        flow.score()
                    ),
                    22.0,
                    Color::WHITE,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            // Per-scenario breakdown
            parent
                .spawn((Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },))
                .with_children(|breakdown| {
                    for scenario in flow.scenarios() {
                        breakdown.spawn((
                            label(
                                format!(
                                    "{}: {} / {}",
                                    scenario.title,
                                    scenario.empathy_points,
                                    scenario.best_points()
                                ),
                                16.0,
                                hex_color(&scenario.color),
                            ),
                            Node {
                                margin: UiRect::bottom(Val::Px(5.0)),
                                ..default()
                            },
                        ));
                    }
                });

            parent.spawn(label(
                format!("Best possible: {}", flow.max_score()),
                14.0,
                MUTED_TEXT_COLOR,
            ));

            spawn_flow_button(parent, "Play Again", FlowEvent::PlayAgain, TINT_COLOR);

            parent.spawn((
                label("Press ENTER to play again", 14.0, MUTED_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(16.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_game_complete_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameCompleteUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_game_complete_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    if enter_pressed(&keyboard) {
        flow_commands.write(FlowCommand(FlowEvent::PlayAgain));
    }
}
