//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qroute_compile::{Coordinate, PlacementStrategy, TransformReport};
use qroute_ir::Circuit;
use qroute_qasmf::{emit, parse};

/// Load a circuit from a qasmf file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    parse(&source).map_err(|e| anyhow::anyhow!("Parse error in {path}: {e}"))
}

/// Save a physical circuit as qasmf.
pub fn save_circuit(circuit: &Circuit<Coordinate>, path: &str) -> Result<()> {
    fs::write(path, emit(circuit)).with_context(|| format!("Failed to write file: {path}"))
}

/// Save a transformation report as pretty-printed JSON.
pub fn save_report(report: &TransformReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write report: {path}"))
}

/// Resolve a placement strategy by name.
pub fn parse_strategy(name: &str) -> Result<PlacementStrategy> {
    Ok(name.parse::<PlacementStrategy>()?)
}
