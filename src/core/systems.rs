//! Core domain: session setup and the flow command loop.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ScenarioCatalog;
use crate::core::events::{FlowCommand, GameCompletedEvent, PointsAwardedEvent, SessionResetEvent};
use crate::core::resources::{ChallengeConfig, ChallengeSession, ValidationPrompt};
use crate::core::state::ChallengeView;
use crate::flow::{ChallengeFlow, FlowEffect, FlowError};

/// Build a fresh session over the loaded catalog and show character creation.
pub(crate) fn initialize_session(
    mut commands: Commands,
    catalog: Res<ScenarioCatalog>,
    config: Res<ChallengeConfig>,
    mut next_view: ResMut<NextState<ChallengeView>>,
) {
    let flow = ChallengeFlow::new(catalog.scenarios.clone())
        .with_avatar_endpoint(config.avatar_endpoint.clone());
    commands.insert_resource(ChallengeSession::new(flow));

    info!(
        "Challenge session started: {} scenarios, bubble seed {}",
        catalog.len(),
        config.seed
    );
    next_view.set(ChallengeView::CharacterCreation);
}

/// Drain flow commands in order, applying each fully before the next.
pub(crate) fn apply_flow_commands(
    mut commands: MessageReader<FlowCommand>,
    mut session: ResMut<ChallengeSession>,
    mut prompt: ResMut<ValidationPrompt>,
    mut points_events: MessageWriter<PointsAwardedEvent>,
    mut reset_events: MessageWriter<SessionResetEvent>,
    mut complete_events: MessageWriter<GameCompletedEvent>,
    current_view: Res<State<ChallengeView>>,
    mut next_view: ResMut<NextState<ChallengeView>>,
) {
    let mut applied = false;

    for FlowCommand(event) in commands.read() {
        match session.flow.apply(event.clone()) {
            Ok(transition) => {
                session.flow = transition.flow;
                applied = true;

                match transition.effect {
                    Some(FlowEffect::CharacterCreated { name }) => {
                        info!("Character created: {}", name);
                    }
                    Some(FlowEffect::PointsAwarded {
                        scenario_index,
                        points,
                    }) => {
                        info!(
                            "Scenario {} answered for {} points. Total: {}",
                            scenario_index + 1,
                            points,
                            session.flow.score()
                        );
                        points_events.write(PointsAwardedEvent {
                            scenario_index,
                            points,
                        });
                    }
                    Some(FlowEffect::GameCompleted { total_points }) => {
                        info!("All scenarios completed with {} points", total_points);
                        complete_events.write(GameCompletedEvent { total_points });
                    }
                    Some(FlowEffect::SessionReset) => {
                        info!("Challenge reset");
                        reset_events.write(SessionResetEvent);
                    }
                    None => {}
                }
            }
            Err(FlowError::EmptyName) => {
                prompt.show("Missing Information", FlowError::EmptyName.to_string());
            }
            Err(e) => {
                warn!("Ignoring flow command: {}", e);
            }
        }
    }

    if applied {
        let target = ChallengeView::for_flow(session.flow.view());
        if *current_view.get() != target {
            next_view.set(target);
        }
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
