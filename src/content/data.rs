//! Data definitions for the scenario catalog RON file.
//!
//! These structs mirror assets/data/scenarios.ron and are used only for
//! deserialization; `into_scenario` turns them into flow records.

use serde::{Deserialize, Serialize};

use crate::flow::{Choice, Scenario};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Scenarios (scenarios.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioDef {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub choices: Vec<ChoiceDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChoiceDef {
    pub id: String,
    pub text: String,
    pub feedback: String,
    pub empathy_points: u32,
}

impl ScenarioDef {
    /// Fresh, unanswered scenario record.
    pub fn into_scenario(self) -> Scenario {
        Scenario {
            id: self.id,
            title: self.title,
            description: self.description,
            color: self.color,
            choices: self
                .choices
                .into_iter()
                .map(|c| Choice {
                    id: c.id,
                    text: c.text,
                    feedback: c.feedback,
                    empathy_points: c.empathy_points,
                })
                .collect(),
            completed: false,
            empathy_points: 0,
            selected_choice: None,
        }
    }
}

/// Parse a `#RRGGBB` color into its byte components.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
