use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use discovery_core::config::{load_discovery_config, LoadedConfig};
use discovery_core::model::Analysis;

/// Read the analysis results (a JSON array of `Analysis`) written by the
/// discovery pass.
pub fn load_analysis_results(path: &Path) -> Result<Vec<Analysis>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read analysis results: {}", path.display()))?;
    let results: Vec<Analysis> = serde_json::from_str(&body).with_context(|| {
        format!("Failed to parse analysis results JSON: {}", path.display())
    })?;
    Ok(results)
}

/// Load both inputs of a run: analysis results and the discovery config
/// (with the hash of its raw bytes).
pub fn load_inputs(results_path: &Path, config_path: &Path) -> Result<(Vec<Analysis>, LoadedConfig)> {
    let results = load_analysis_results(results_path)?;
    let loaded = load_discovery_config(config_path)
        .with_context(|| format!("Failed to load discovery config: {}", config_path.display()))?;
    Ok((results, loaded))
}
