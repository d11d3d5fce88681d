//! Validation for scenario catalog structure.

use std::collections::HashSet;

use super::data::{ScenarioDef, parse_hex_color};

pub const MIN_CHOICES: usize = 2;
pub const MAX_CHOICES: usize = 3;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub scenario_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scenario '{}' field '{}': {}",
            self.scenario_id, self.field, self.message
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $scenario_id:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                scenario_id: $scenario_id.to_string(),
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate the catalog structure.
/// Returns a list of validation errors, empty if the catalog is well formed.
pub fn validate_catalog(scenarios: &[ScenarioDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut scenario_ids = HashSet::new();
    let mut choice_ids = HashSet::new();

    check!(
        errors,
        !scenarios.is_empty(),
        "<catalog>",
        "items",
        "catalog contains no scenarios"
    );

    for scenario in scenarios {
        let id = &scenario.id;

        check!(errors, !id.trim().is_empty(), id, "id", "id is empty");
        check!(
            errors,
            scenario_ids.insert(id.clone()),
            id,
            "id",
            "duplicate scenario id"
        );
        check!(
            errors,
            !scenario.title.trim().is_empty(),
            id,
            "title",
            "title is empty"
        );
        check!(
            errors,
            !scenario.description.trim().is_empty(),
            id,
            "description",
            "description is empty"
        );
        check!(
            errors,
            parse_hex_color(&scenario.color).is_some(),
            id,
            "color",
            "'{}' is not a #RRGGBB color",
            scenario.color
        );
        check!(
            errors,
            (MIN_CHOICES..=MAX_CHOICES).contains(&scenario.choices.len()),
            id,
            "choices",
            "expected {}-{} choices, found {}",
            MIN_CHOICES,
            MAX_CHOICES,
            scenario.choices.len()
        );

        // Choice ids are unique across the whole catalog
        for choice in &scenario.choices {
            check!(
                errors,
                choice_ids.insert(choice.id.clone()),
                id,
                "choices.id",
                "duplicate choice id '{}'",
                choice.id
            );
            check!(
                errors,
                !choice.text.trim().is_empty(),
                id,
                "choices.text",
                "choice '{}' has no text",
                choice.id
            );
            check!(
                errors,
                !choice.feedback.trim().is_empty(),
                id,
                "choices.feedback",
                "choice '{}' has no feedback",
                choice.id
            );
        }
    }

    errors
}
