//! Flow domain: character, scenario and choice records.

use serde::Serialize;

use super::avatar::avatar_url;

/// The player's identity for the session. Built once on name submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    /// Generated avatar image address, keyed by the name. `None` when the
    /// configured endpoint is not a valid URL; the badge is shown either way.
    pub avatar: Option<String>,
}

impl Character {
    /// Build a character from an already validated name.
    pub fn new(name: impl Into<String>, avatar_endpoint: &str) -> Self {
        let name = name.into();
        let avatar = avatar_url(avatar_endpoint, &name).ok().map(String::from);
        Self { name, avatar }
    }
}

/// One selectable response to a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub feedback: String,
    pub empathy_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
    /// Display color as `#RRGGBB`
    pub color: String,
    pub completed: bool,
    /// Points awarded when the scenario was completed (0 until then)
    pub empathy_points: u32,
    /// Choice recorded on completion, kept so the result can be re-viewed
    pub selected_choice: Option<String>,
}

impl Scenario {
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    pub fn selected(&self) -> Option<&Choice> {
        self.selected_choice
            .as_deref()
            .and_then(|id| self.choice(id))
    }

    /// Highest point value among this scenario's choices.
    pub fn best_points(&self) -> u32 {
        self.choices
            .iter()
            .map(|c| c.empathy_points)
            .max()
            .unwrap_or(0)
    }

    /// The choice carrying the highest point value (first one on ties).
    pub fn best_choice(&self) -> Option<&Choice> {
        self.choices.iter().reduce(|best, c| {
            if c.empathy_points > best.empathy_points {
                c
            } else {
                best
            }
        })
    }

    /// Returns a completed copy with the given choice recorded.
    pub(crate) fn completed_with(&self, choice: &Choice) -> Self {
        Self {
            completed: true,
            empathy_points: choice.empathy_points,
            selected_choice: Some(choice.id.clone()),
            ..self.clone()
        }
    }

    /// Short form of the description used on list cards.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.description.chars();
        let mut preview: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            preview.push_str("...");
        }
        preview
    }
}
