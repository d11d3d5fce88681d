//! Content domain: scenario catalog data, loading and validation.

mod data;
mod loader;
mod validation;

pub use data::{ChoiceDef, DataFile, ScenarioDef, parse_hex_color};
pub use loader::{BUILTIN_SCENARIOS, CatalogLoadError, builtin_scenario_defs, parse_scenarios};
pub use validation::{MAX_CHOICES, MIN_CHOICES, ValidationError, validate_catalog};

use bevy::prelude::*;

use crate::flow::Scenario;

/// The fixed scenario catalog in presentation order.
#[derive(Resource, Debug, Default, Clone)]
pub struct ScenarioCatalog {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Sum of each scenario's highest-point choice.
    pub fn max_score(&self) -> u32 {
        self.scenarios.iter().map(Scenario::best_points).sum()
    }
}

/// Parse the built-in catalog into fresh scenario records.
pub fn builtin_catalog() -> Result<ScenarioCatalog, CatalogLoadError> {
    let scenarios = builtin_scenario_defs()?
        .into_iter()
        .map(ScenarioDef::into_scenario)
        .collect();
    Ok(ScenarioCatalog { scenarios })
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioCatalog>()
            .add_systems(PreStartup, load_scenario_catalog);
    }
}

/// Load and validate the catalog. On failure the catalog stays empty and the
/// flow cannot leave the scenario list.
fn load_scenario_catalog(mut catalog: ResMut<ScenarioCatalog>) {
    let defs = match builtin_scenario_defs() {
        Ok(defs) => defs,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let errors = validate_catalog(&defs);
    if !errors.is_empty() {
        for e in &errors {
            error!("Catalog validation: {}", e);
        }
        return;
    }

    catalog.scenarios = defs.into_iter().map(ScenarioDef::into_scenario).collect();
    info!(
        "Scenario catalog loaded: {} scenarios, max score {}",
        catalog.len(),
        catalog.max_score()
    );
}
