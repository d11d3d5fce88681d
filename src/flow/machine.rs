//! Flow domain: the challenge state machine.
//!
//! `ChallengeFlow::apply` is a pure reducer. It never mutates the current
//! flow; it returns the next flow together with the side effect (if any) the
//! host should carry out, such as spawning reward bubbles.

use serde::Serialize;
use std::sync::Arc;

use super::avatar::DEFAULT_AVATAR_ENDPOINT;
use super::model::{Character, Scenario};

/// Which view the flow is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowView {
    CharacterCreation,
    ScenarioList,
    /// Scenario open for answering (or re-viewing, if already completed)
    ScenarioActive { index: usize },
    /// Feedback for the choice just made
    ScenarioFeedback { index: usize, choice_id: String },
    /// Terminal summary after the last scenario
    GameComplete,
    MiniGame,
    /// Mini-game with the "all scenarios completed" reset/return prompt open
    MiniGamePrompt,
}

/// User input the flow reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowEvent {
    SubmitName(String),
    OpenScenario(usize),
    SelectChoice(String),
    Advance,
    PlayAgain,
    OpenMiniGame,
    StartNextScenario,
    ResetGame,
    BackToList,
}

/// Side effects produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    CharacterCreated { name: String },
    PointsAwarded { scenario_index: usize, points: u32 },
    GameCompleted { total_points: u32 },
    SessionReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Submitted character name was empty or whitespace
    EmptyName,
    /// The event has no meaning in the current view
    InvalidTransition { view: FlowView, event: FlowEvent },
    UnknownScenario(usize),
    UnknownChoice {
        scenario_id: String,
        choice_id: String,
    },
    /// Scenarios award points once; answering again is refused
    ScenarioAlreadyCompleted(String),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::EmptyName => write!(f, "Please enter your character name."),
            FlowError::InvalidTransition { view, event } => {
                write!(f, "Event {:?} is not valid in view {:?}", event, view)
            }
            FlowError::UnknownScenario(index) => write!(f, "No scenario at index {}", index),
            FlowError::UnknownChoice {
                scenario_id,
                choice_id,
            } => write!(
                f,
                "Scenario '{}' has no choice '{}'",
                scenario_id, choice_id
            ),
            FlowError::ScenarioAlreadyCompleted(id) => {
                write!(f, "Scenario '{}' has already been completed", id)
            }
        }
    }
}

impl std::error::Error for FlowError {}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub flow: ChallengeFlow,
    pub effect: Option<FlowEffect>,
}

impl Transition {
    fn quiet(flow: ChallengeFlow) -> Self {
        Self { flow, effect: None }
    }

    fn with_effect(flow: ChallengeFlow, effect: FlowEffect) -> Self {
        Self {
            flow,
            effect: Some(effect),
        }
    }
}

/// Whole session state for the challenge screen.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeFlow {
    view: FlowView,
    character: Option<Character>,
    scenarios: Vec<Scenario>,
    score: u32,
    #[serde(skip)]
    avatar_endpoint: String,
    /// Catalog as loaded, restored on reset
    #[serde(skip)]
    initial: Arc<[Scenario]>,
}

impl ChallengeFlow {
    /// Start a fresh session over the given catalog.
    pub fn new(catalog: Vec<Scenario>) -> Self {
        let initial: Arc<[Scenario]> = catalog.into();
        Self {
            view: FlowView::CharacterCreation,
            character: None,
            scenarios: initial.to_vec(),
            score: 0,
            avatar_endpoint: DEFAULT_AVATAR_ENDPOINT.to_string(),
            initial,
        }
    }

    pub fn with_avatar_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.avatar_endpoint = endpoint.into();
        self
    }

    pub fn view(&self) -> &FlowView {
        &self.view
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn scenario(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn completed_count(&self) -> usize {
        self.scenarios.iter().filter(|s| s.completed).count()
    }

    /// Sum of points recorded on completed scenarios. Always equals `score()`.
    pub fn awarded_total(&self) -> u32 {
        self.scenarios
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.empathy_points)
            .sum()
    }

    /// Best achievable score over one pass of the catalog.
    pub fn max_score(&self) -> u32 {
        self.scenarios.iter().map(Scenario::best_points).sum()
    }

    pub fn next_incomplete(&self) -> Option<usize> {
        self.scenarios.iter().position(|s| !s.completed)
    }

    pub fn all_completed(&self) -> bool {
        self.next_incomplete().is_none()
    }

    /// Index of the scenario currently open, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self.view {
            FlowView::ScenarioActive { index } | FlowView::ScenarioFeedback { index, .. } => {
                Some(index)
            }
            _ => None,
        }
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.scenarios.len()
    }

    /// Apply one event and return the next flow.
    pub fn apply(&self, event: FlowEvent) -> Result<Transition, FlowError> {
        match (&self.view, event) {
            (FlowView::CharacterCreation, FlowEvent::SubmitName(name)) => {
                self.create_character(&name)
            }
            (FlowView::ScenarioList, FlowEvent::OpenScenario(index)) => self.open_scenario(index),
            (FlowView::ScenarioActive { index }, FlowEvent::SelectChoice(choice_id)) => {
                self.select_choice(*index, &choice_id)
            }
            (FlowView::ScenarioFeedback { index, .. }, FlowEvent::Advance) => {
                Ok(self.advance(*index))
            }
            (FlowView::GameComplete, FlowEvent::PlayAgain) => {
                Ok(self.reset_into(FlowView::ScenarioList))
            }
            (FlowView::ScenarioList, FlowEvent::OpenMiniGame) => {
                Ok(Transition::quiet(self.with_view(FlowView::MiniGame)))
            }
            (FlowView::MiniGame, FlowEvent::StartNextScenario) => {
                let view = match self.next_incomplete() {
                    Some(index) => FlowView::ScenarioActive { index },
                    None => FlowView::MiniGamePrompt,
                };
                Ok(Transition::quiet(self.with_view(view)))
            }
            (FlowView::MiniGamePrompt, FlowEvent::ResetGame) => {
                Ok(self.reset_into(FlowView::MiniGame))
            }
            (
                FlowView::MiniGame
                | FlowView::MiniGamePrompt
                | FlowView::ScenarioActive { .. }
                | FlowView::ScenarioFeedback { .. },
                FlowEvent::BackToList,
            ) => Ok(Transition::quiet(self.with_view(FlowView::ScenarioList))),
            (view, event) => Err(FlowError::InvalidTransition {
                view: view.clone(),
                event,
            }),
        }
    }

    fn with_view(&self, view: FlowView) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    fn create_character(&self, name: &str) -> Result<Transition, FlowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FlowError::EmptyName);
        }

        let mut next = self.with_view(FlowView::ScenarioList);
        next.character = Some(Character::new(name, &self.avatar_endpoint));
        Ok(Transition::with_effect(
            next,
            FlowEffect::CharacterCreated {
                name: name.to_string(),
            },
        ))
    }

    fn open_scenario(&self, index: usize) -> Result<Transition, FlowError> {
        if index >= self.scenarios.len() {
            return Err(FlowError::UnknownScenario(index));
        }
        Ok(Transition::quiet(
            self.with_view(FlowView::ScenarioActive { index }),
        ))
    }

    fn select_choice(&self, index: usize, choice_id: &str) -> Result<Transition, FlowError> {
        let scenario = self
            .scenarios
            .get(index)
            .ok_or(FlowError::UnknownScenario(index))?;

        if scenario.completed {
            return Err(FlowError::ScenarioAlreadyCompleted(scenario.id.clone()));
        }

        let choice = scenario
            .choice(choice_id)
            .ok_or_else(|| FlowError::UnknownChoice {
                scenario_id: scenario.id.clone(),
                choice_id: choice_id.to_string(),
            })?;
        let points = choice.empathy_points;

        let mut scenarios = self.scenarios.clone();
        scenarios[index] = scenario.completed_with(choice);

        let next = Self {
            view: FlowView::ScenarioFeedback {
                index,
                choice_id: choice.id.clone(),
            },
            scenarios,
            score: self.score.saturating_add(points),
            ..self.clone()
        };

        Ok(Transition::with_effect(
            next,
            FlowEffect::PointsAwarded {
                scenario_index: index,
                points,
            },
        ))
    }

    fn advance(&self, index: usize) -> Transition {
        if self.is_last(index) {
            Transition::with_effect(
                self.with_view(FlowView::GameComplete),
                FlowEffect::GameCompleted {
                    total_points: self.score,
                },
            )
        } else {
            Transition::quiet(self.with_view(FlowView::ScenarioActive { index: index + 1 }))
        }
    }

    /// Restore the loaded catalog and zero the score. The character is kept.
    fn reset_into(&self, view: FlowView) -> Transition {
        let next = Self {
            view,
            scenarios: self.initial.to_vec(),
            score: 0,
            ..self.clone()
        };
        Transition::with_effect(next, FlowEffect::SessionReset)
    }
}
