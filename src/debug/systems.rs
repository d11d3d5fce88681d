//! Dev tools: hotkeys and the status overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ChallengeSession, FlowCommand};
use crate::debug::{DebugState, DebugStatusMessage};
use crate::flow::{ChallengeFlow, FlowEvent, FlowView};

/// Commands that answer every incomplete scenario with its best choice and
/// return to the list. Empty unless the list is showing.
pub fn autoplay_commands(flow: &ChallengeFlow) -> Vec<FlowEvent> {
    if *flow.view() != FlowView::ScenarioList {
        return Vec::new();
    }

    flow.scenarios()
        .iter()
        .enumerate()
        .filter(|(_, scenario)| !scenario.completed)
        .filter_map(|(index, scenario)| {
            let choice = scenario.best_choice()?;
            Some([
                FlowEvent::OpenScenario(index),
                FlowEvent::SelectChoice(choice.id.clone()),
                FlowEvent::BackToList,
            ])
        })
        .flatten()
        .collect()
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Option<Res<ChallengeSession>>,
    mut debug_state: ResMut<DebugState>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    let Some(session) = session else {
        return;
    };

    // F1: Dump session
    if keyboard.just_pressed(KeyCode::F1) {
        match serde_json::to_string_pretty(&session.flow) {
            Ok(json) => {
                info!("[DEBUG] Session:\n{}", json);
                debug_state.set_message("Session dumped to log", 2.0);
            }
            Err(err) => error!("[DEBUG] Failed to serialize session: {}", err),
        }
    }

    // F2: Autoplay
    if keyboard.just_pressed(KeyCode::F2) {
        let commands = autoplay_commands(&session.flow);
        if commands.is_empty() {
            debug_state.set_message("Autoplay runs from the scenario list", 2.0);
            return;
        }
        info!("[DEBUG] Autoplay queued {} commands", commands.len());
        debug_state.set_message("Autoplay: best choices", 2.0);
        for event in commands {
            flow_commands.write(FlowCommand(event));
        }
    }
}

/// Count down the status message timer
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    // The countdown alone is not a visible change
    let state = debug_state.bypass_change_detection();
    let Some((_, duration)) = state.status_message.as_mut() else {
        return;
    };
    *duration -= time.delta_secs();
    if *duration <= 0.0 {
        debug_state.status_message = None;
    }
}

pub(crate) fn sync_debug_status(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    existing: Query<Entity, With<DebugStatusMessage>>,
) {
    if !debug_state.is_changed() {
        return;
    }

    let message = debug_state.status_message.as_ref().map(|(text, _)| text);
    match (message, existing.iter().next()) {
        (Some(text), None) => {
            commands.spawn((
                DebugStatusMessage,
                Text::new(text.clone()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(10.0),
                    bottom: Val::Px(10.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                ZIndex(200),
            ));
        }
        (Some(text), Some(entity)) => {
            commands.entity(entity).insert(Text::new(text.clone()));
        }
        (None, Some(entity)) => {
            commands.entity(entity).despawn();
        }
        (None, None) => {}
    }
}
