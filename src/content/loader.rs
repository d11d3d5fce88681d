//! Loader for the embedded scenario catalog.

use ron::Options;

use super::data::{DataFile, ScenarioDef};

/// The catalog ships inside the binary; there is no runtime file to miss.
pub const BUILTIN_SCENARIOS: &str = include_str!("../../assets/data/scenarios.ron");

/// Error type for catalog parsing failures.
#[derive(Debug)]
pub struct CatalogLoadError {
    pub source_name: String,
    pub message: String,
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.source_name, self.message)
    }
}

impl std::error::Error for CatalogLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a RON `DataFile<ScenarioDef>` from a string.
pub fn parse_scenarios(
    source_name: &str,
    contents: &str,
) -> Result<Vec<ScenarioDef>, CatalogLoadError> {
    let data: DataFile<ScenarioDef> = ron_options()
        .from_str(contents)
        .map_err(|e| CatalogLoadError {
            source_name: source_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse the built-in catalog definitions.
pub fn builtin_scenario_defs() -> Result<Vec<ScenarioDef>, CatalogLoadError> {
    parse_scenarios("scenarios.ron", BUILTIN_SCENARIOS)
}
