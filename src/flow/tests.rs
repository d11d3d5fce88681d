//! Flow domain: tests for the challenge state machine.

use super::{
    ChallengeFlow, DEFAULT_AVATAR_ENDPOINT, FlowEffect, FlowError, FlowEvent, FlowView,
    avatar_initial, avatar_palette_index, avatar_url,
};
use crate::content::builtin_catalog;

fn fresh_flow() -> ChallengeFlow {
    ChallengeFlow::new(builtin_catalog().expect("built-in catalog").scenarios)
}

/// Apply an event that must succeed and return the next flow.
fn step(flow: &ChallengeFlow, event: FlowEvent) -> ChallengeFlow {
    flow.apply(event).expect("transition should succeed").flow
}

fn at_list() -> ChallengeFlow {
    step(&fresh_flow(), FlowEvent::SubmitName("Ada".to_string()))
}

/// Answer a scenario from the list and return to the list.
fn answer(flow: &ChallengeFlow, index: usize, choice_id: &str) -> ChallengeFlow {
    let flow = step(flow, FlowEvent::OpenScenario(index));
    let flow = step(&flow, FlowEvent::SelectChoice(choice_id.to_string()));
    step(&flow, FlowEvent::BackToList)
}

// -----------------------------------------------------------------------------
// Character creation
// -----------------------------------------------------------------------------

#[test]
fn test_flow_starts_in_character_creation() {
    let flow = fresh_flow();
    assert_eq!(flow.view(), &FlowView::CharacterCreation);
    assert!(flow.character().is_none());
    assert_eq!(flow.score(), 0);
    assert_eq!(flow.scenarios().len(), 5);
}

#[test]
fn test_empty_name_rejected() {
    let flow = fresh_flow();
    for name in ["", "   ", "\t\n"] {
        let err = flow
            .apply(FlowEvent::SubmitName(name.to_string()))
            .unwrap_err();
        assert_eq!(err, FlowError::EmptyName);
    }
    // Rejection leaves the flow where it was
    assert_eq!(flow.view(), &FlowView::CharacterCreation);
}

#[test]
fn test_name_accepted_and_trimmed() {
    let transition = fresh_flow()
        .apply(FlowEvent::SubmitName("  Ada ".to_string()))
        .unwrap();

    assert_eq!(transition.flow.view(), &FlowView::ScenarioList);
    let character = transition.flow.character().unwrap();
    assert_eq!(character.name, "Ada");
    assert_eq!(
        transition.effect,
        Some(FlowEffect::CharacterCreated {
            name: "Ada".to_string()
        })
    );
}

#[test]
fn test_avatar_is_deterministic_per_name() {
    let a = step(&fresh_flow(), FlowEvent::SubmitName("Ada".to_string()));
    let b = step(&fresh_flow(), FlowEvent::SubmitName("Ada".to_string()));
    let c = step(&fresh_flow(), FlowEvent::SubmitName("Grace".to_string()));

    let avatar_a = &a.character().unwrap().avatar;
    assert_eq!(avatar_a, &b.character().unwrap().avatar);
    assert_ne!(avatar_a, &c.character().unwrap().avatar);
    assert_eq!(
        avatar_a.as_deref(),
        Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Ada")
    );
}

#[test]
fn test_avatar_url_encodes_seed() {
    let url = avatar_url(DEFAULT_AVATAR_ENDPOINT, "Ada Lovelace&co").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.dicebear.com/7.x/avataaars/svg?seed=Ada+Lovelace%26co"
    );
    assert_eq!(url.query_pairs().count(), 1);

    let url = avatar_url("http://x/y", "é").unwrap();
    assert_eq!(url.as_str(), "http://x/y?seed=%C3%A9");
}

#[test]
fn test_invalid_avatar_endpoint_leaves_no_avatar() {
    assert!(avatar_url("not a url", "Ada").is_err());

    let flow = fresh_flow().with_avatar_endpoint("not a url");
    let flow = step(&flow, FlowEvent::SubmitName("Ada".to_string()));
    let character = flow.character().unwrap();
    assert_eq!(character.name, "Ada");
    assert_eq!(character.avatar, None);
}

#[test]
fn test_custom_avatar_endpoint() {
    let flow = fresh_flow().with_avatar_endpoint("http://localhost/avatar");
    let flow = step(&flow, FlowEvent::SubmitName("Ada".to_string()));
    assert_eq!(
        flow.character().unwrap().avatar.as_deref(),
        Some("http://localhost/avatar?seed=Ada")
    );
}

#[test]
fn test_avatar_badge_helpers() {
    assert_eq!(avatar_initial("ada"), "A");
    assert_eq!(avatar_initial(""), "");
    let index = avatar_palette_index("Ada", 8);
    assert!(index < 8);
    assert_eq!(index, avatar_palette_index("Ada", 8));
    assert_eq!(avatar_palette_index("Ada", 0), 0);
}

// -----------------------------------------------------------------------------
// Scenario answering
// -----------------------------------------------------------------------------

#[test]
fn test_end_to_end_first_scenario() {
    let flow = at_list();
    assert_eq!(flow.score(), 0);
    assert!(flow.scenarios().iter().all(|s| !s.completed));

    let flow = step(&flow, FlowEvent::OpenScenario(0));
    assert_eq!(flow.view(), &FlowView::ScenarioActive { index: 0 });

    let transition = flow
        .apply(FlowEvent::SelectChoice("1b".to_string()))
        .unwrap();
    let flow = transition.flow;
    assert_eq!(
        flow.view(),
        &FlowView::ScenarioFeedback {
            index: 0,
            choice_id: "1b".to_string()
        }
    );
    assert_eq!(
        transition.effect,
        Some(FlowEffect::PointsAwarded {
            scenario_index: 0,
            points: 10
        })
    );

    let chosen = flow.scenario(0).unwrap().selected().unwrap();
    assert!(chosen.feedback.starts_with("Great job!"));
    assert_eq!(chosen.empathy_points, 10);
    assert_eq!(flow.score(), 10);

    let flow = step(&flow, FlowEvent::Advance);
    assert_eq!(flow.view(), &FlowView::ScenarioActive { index: 1 });
}

#[test]
fn test_score_increases_by_choice_points() {
    let flow = at_list();
    for (index, choice_id, points) in [(0, "1c", 5), (1, "2b", 7), (4, "5a", 2)] {
        let before = flow.score();
        let open = step(&flow, FlowEvent::OpenScenario(index));
        let answered = step(&open, FlowEvent::SelectChoice(choice_id.to_string()));
        assert_eq!(answered.score(), before + points);
    }
}

#[test]
fn test_selection_completes_exactly_one_scenario() {
    let flow = answer(&at_list(), 0, "1a");
    let open = step(&flow, FlowEvent::OpenScenario(2));
    let answered = step(&open, FlowEvent::SelectChoice("3b".to_string()));

    for (i, (before, after)) in open
        .scenarios()
        .iter()
        .zip(answered.scenarios())
        .enumerate()
    {
        if i == 2 {
            assert!(!before.completed);
            assert!(after.completed);
            assert_eq!(after.empathy_points, 8);
        } else {
            assert_eq!(before, after);
        }
    }
    assert_eq!(answered.completed_count(), open.completed_count() + 1);
}

#[test]
fn test_zero_point_choice_still_completes() {
    let flow = answer(&at_list(), 0, "1a");
    let scenario = flow.scenario(0).unwrap();
    assert!(scenario.completed);
    assert_eq!(scenario.empathy_points, 0);
    assert_eq!(flow.score(), 0);
}

#[test]
fn test_reanswer_is_refused() {
    let flow = answer(&at_list(), 0, "1c");
    let reopened = step(&flow, FlowEvent::OpenScenario(0));
    assert_eq!(reopened.view(), &FlowView::ScenarioActive { index: 0 });

    let err = reopened
        .apply(FlowEvent::SelectChoice("1b".to_string()))
        .unwrap_err();
    assert_eq!(err, FlowError::ScenarioAlreadyCompleted("1".to_string()));
    assert_eq!(reopened.score(), 5);
    assert_eq!(reopened.scenario(0).unwrap().selected_choice.as_deref(), Some("1c"));
}

#[test]
fn test_unknown_choice_and_scenario() {
    let flow = at_list();
    assert_eq!(
        flow.apply(FlowEvent::OpenScenario(9)).unwrap_err(),
        FlowError::UnknownScenario(9)
    );

    let open = step(&flow, FlowEvent::OpenScenario(1));
    assert_eq!(
        open.apply(FlowEvent::SelectChoice("1b".to_string()))
            .unwrap_err(),
        FlowError::UnknownChoice {
            scenario_id: "2".to_string(),
            choice_id: "1b".to_string()
        }
    );
}

#[test]
fn test_invalid_transition_leaves_state() {
    let flow = at_list();
    let err = flow.apply(FlowEvent::Advance).unwrap_err();
    assert!(matches!(
        err,
        FlowError::InvalidTransition {
            view: FlowView::ScenarioList,
            event: FlowEvent::Advance
        }
    ));

    let err = fresh_flow().apply(FlowEvent::OpenScenario(0)).unwrap_err();
    assert!(matches!(err, FlowError::InvalidTransition { .. }));
}

#[test]
fn test_score_matches_awarded_total() {
    let mut flow = at_list();
    for (index, choice_id) in [(3, "4c"), (1, "2a"), (0, "1b")] {
        flow = answer(&flow, index, choice_id);
        assert_eq!(flow.score(), flow.awarded_total());
    }
    assert_eq!(flow.score(), 8 + 10 + 10);
}

// -----------------------------------------------------------------------------
// Completion and reset
// -----------------------------------------------------------------------------

fn play_best_run() -> ChallengeFlow {
    let mut flow = step(&at_list(), FlowEvent::OpenScenario(0));
    for index in 0..5 {
        let best = flow.scenario(index).unwrap().best_choice().unwrap().id.clone();
        flow = step(&flow, FlowEvent::SelectChoice(best));
        flow = step(&flow, FlowEvent::Advance);
    }
    flow
}

#[test]
fn test_best_run_reaches_max_score() {
    let flow = play_best_run();
    assert_eq!(flow.view(), &FlowView::GameComplete);
    assert_eq!(flow.score(), 47);
    assert_eq!(flow.score(), flow.max_score());
    assert!(flow.all_completed());
}

#[test]
fn test_last_advance_reports_completion() {
    let mut flow = step(&at_list(), FlowEvent::OpenScenario(4));
    flow = step(&flow, FlowEvent::SelectChoice("5c".to_string()));
    let transition = flow.apply(FlowEvent::Advance).unwrap();
    assert_eq!(transition.flow.view(), &FlowView::GameComplete);
    assert_eq!(
        transition.effect,
        Some(FlowEffect::GameCompleted { total_points: 7 })
    );
}

#[test]
fn test_play_again_resets_catalog() {
    let completed = play_best_run();
    let transition = completed.apply(FlowEvent::PlayAgain).unwrap();
    let flow = transition.flow;

    assert_eq!(transition.effect, Some(FlowEffect::SessionReset));
    assert_eq!(flow.view(), &FlowView::ScenarioList);
    assert_eq!(flow.score(), 0);
    assert_eq!(flow.scenarios(), fresh_flow().scenarios());
    for s in flow.scenarios() {
        assert!(!s.completed);
        assert_eq!(s.empathy_points, 0);
    }
    // The character survives a reset
    assert_eq!(flow.character().unwrap().name, "Ada");
}

// -----------------------------------------------------------------------------
// Mini-game
// -----------------------------------------------------------------------------

#[test]
fn test_minigame_starts_first_incomplete() {
    let flow = answer(&answer(&at_list(), 0, "1b"), 1, "2a");
    let game = step(&flow, FlowEvent::OpenMiniGame);
    assert_eq!(game.view(), &FlowView::MiniGame);

    let next = step(&game, FlowEvent::StartNextScenario);
    assert_eq!(next.view(), &FlowView::ScenarioActive { index: 2 });
}

#[test]
fn test_minigame_prompt_when_all_completed() {
    let mut flow = at_list();
    for (index, choice_id) in [(0, "1a"), (1, "2b"), (2, "3c"), (3, "4b"), (4, "5b")] {
        flow = answer(&flow, index, choice_id);
    }
    let game = step(&flow, FlowEvent::OpenMiniGame);
    let prompt = step(&game, FlowEvent::StartNextScenario);
    assert_eq!(prompt.view(), &FlowView::MiniGamePrompt);

    let back = step(&prompt, FlowEvent::BackToList);
    assert_eq!(back.view(), &FlowView::ScenarioList);
    assert_eq!(back.score(), 7 + 7 + 9 + 10);

    let transition = prompt.apply(FlowEvent::ResetGame).unwrap();
    assert_eq!(transition.effect, Some(FlowEffect::SessionReset));
    assert_eq!(transition.flow.view(), &FlowView::MiniGame);
    assert_eq!(transition.flow.score(), 0);
    assert_eq!(transition.flow.completed_count(), 0);
}

#[test]
fn test_minigame_back_to_list() {
    let game = step(&at_list(), FlowEvent::OpenMiniGame);
    let back = step(&game, FlowEvent::BackToList);
    assert_eq!(back.view(), &FlowView::ScenarioList);
}

#[test]
fn test_empty_catalog_goes_straight_to_prompt() {
    let flow = ChallengeFlow::new(Vec::new());
    let flow = step(&flow, FlowEvent::SubmitName("Ada".to_string()));
    let game = step(&flow, FlowEvent::OpenMiniGame);
    let prompt = step(&game, FlowEvent::StartNextScenario);
    assert_eq!(prompt.view(), &FlowView::MiniGamePrompt);
}

// -----------------------------------------------------------------------------
// Card previews
// -----------------------------------------------------------------------------

#[test]
fn test_preview_marks_only_truncated_text() {
    let mut scenario = fresh_flow().scenario(0).unwrap().clone();

    scenario.description = "Short text.".to_string();
    assert_eq!(scenario.preview(100), "Short text.");
    assert_eq!(scenario.preview(11), "Short text.");
    assert_eq!(scenario.preview(5), "Short...");

    scenario.description = "ééé".to_string();
    assert_eq!(scenario.preview(2), "éé...");
}
