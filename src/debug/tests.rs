//! Dev tools: tests for autoplay.

use bevy::prelude::*;

use super::systems::update_status_message;
use super::{DebugState, autoplay_commands};
use crate::content::builtin_catalog;
use crate::flow::{ChallengeFlow, FlowEvent};

fn at_list() -> ChallengeFlow {
    let flow = ChallengeFlow::new(builtin_catalog().expect("built-in catalog").scenarios);
    flow.apply(FlowEvent::SubmitName("Ada".to_string()))
        .expect("name accepted")
        .flow
}

fn run(flow: &ChallengeFlow, events: Vec<FlowEvent>) -> ChallengeFlow {
    events.into_iter().fold(flow.clone(), |flow, event| {
        flow.apply(event).expect("autoplay command should apply").flow
    })
}

#[test]
fn test_autoplay_reaches_max_score() {
    let flow = at_list();
    let commands = autoplay_commands(&flow);

    assert_eq!(commands.len(), 15);
    let done = run(&flow, commands);
    assert!(done.all_completed());
    assert_eq!(done.score(), 47);
    assert_eq!(done.score(), done.max_score());
}

#[test]
fn test_autoplay_skips_completed_scenarios() {
    let flow = at_list();
    let flow = run(
        &flow,
        vec![
            FlowEvent::OpenScenario(0),
            FlowEvent::SelectChoice("1a".to_string()),
            FlowEvent::BackToList,
        ],
    );

    let commands = autoplay_commands(&flow);
    assert_eq!(commands.len(), 12);
    assert!(!commands.contains(&FlowEvent::OpenScenario(0)));

    let done = run(&flow, commands);
    assert_eq!(done.score(), 37);
}

#[test]
fn test_autoplay_only_from_list() {
    let flow = at_list()
        .apply(FlowEvent::OpenScenario(1))
        .expect("open scenario")
        .flow;

    assert!(autoplay_commands(&flow).is_empty());
}

// -----------------------------------------------------------------------------
// Status message
// -----------------------------------------------------------------------------

/// Frames in which `DebugState` was seen as changed
#[derive(Resource, Default)]
struct ChangedFrames(u32);

fn count_changes(state: Res<DebugState>, mut frames: ResMut<ChangedFrames>) {
    if state.is_changed() {
        frames.0 += 1;
    }
}

fn status_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<DebugState>()
        .init_resource::<ChangedFrames>()
        .add_systems(Update, (update_status_message, count_changes).chain());
    app
}

#[test]
fn test_status_countdown_is_not_a_change() {
    let mut app = status_app();
    app.world_mut()
        .resource_mut::<DebugState>()
        .set_message("Session dumped to log", 60.0);

    app.update();
    app.update();
    app.update();

    assert_eq!(app.world().resource::<ChangedFrames>().0, 1);
    assert!(app.world().resource::<DebugState>().status_message.is_some());
}

#[test]
fn test_expired_status_clears() {
    let mut app = status_app();
    app.update();
    let before = app.world().resource::<ChangedFrames>().0;

    app.world_mut()
        .resource_mut::<DebugState>()
        .set_message("Autoplay: best choices", 0.0);
    app.update();

    assert!(app.world().resource::<DebugState>().status_message.is_none());
    assert_eq!(app.world().resource::<ChangedFrames>().0, before + 1);
}
