use std::path::Path;

use anyhow::{Context, Result};

use super::model::Observation;

/// Load the observation sequence from a JSON file.
///
/// Expected schema (the static resource the original chart shipped with):
///
/// ```json
/// [
///   { "timestamp": "2024-01-01", "value": 5.0 },
///   { "timestamp": "2024-01-02", "value": 10.0 }
/// ]
/// ```
///
/// No validation beyond parsing; ordering is taken as-is.
pub fn load_file(path: &Path) -> Result<Vec<Observation>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_observations(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a JSON array of `{timestamp, value}` records.
pub fn parse_observations(text: &str) -> Result<Vec<Observation>> {
    serde_json::from_str(text).context("expected a JSON array of {timestamp, value} objects")
}
