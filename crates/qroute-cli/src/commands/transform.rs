//! Transform command implementation.

use std::io;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qroute_compile::CircuitTransformer;
use qroute_qasmf::emit_to;

use super::common::{load_circuit, parse_strategy, save_circuit, save_report};

/// Execute the transform command.
///
/// The routed circuit goes to `output`, or to stdout; progress goes to
/// stderr so that stdout stays a valid qasmf stream.
pub fn execute(
    input: &str,
    output: Option<&str>,
    strategy: &str,
    report: Option<&str>,
) -> Result<()> {
    let strategy = parse_strategy(strategy)?;

    eprintln!(
        "{} Transforming {} with {} placement",
        style("→").cyan().bold(),
        style(input).green(),
        style(strategy).yellow()
    );

    let circuit = load_circuit(input)?;
    eprintln!(
        "  Loaded: {} instructions, {} qubits",
        circuit.len(),
        circuit.qubits().len()
    );

    let transformed = CircuitTransformer::new(strategy).transform(&circuit)?;
    let summary = &transformed.report;

    eprintln!("{} Transformation complete", style("✓").green().bold());
    eprintln!(
        "  Result: {}x{} grid, {} instructions, {} SWAPs inserted",
        summary.grid_dimension,
        summary.grid_dimension,
        summary.output_instructions,
        summary.swap_count
    );

    match output {
        Some(path) => {
            save_circuit(&transformed.circuit, path)?;
            eprintln!("  Output: {}", style(path).green());
        }
        None => {
            emit_to(&transformed.circuit, io::stdout().lock())
                .context("Failed to write to stdout")?;
        }
    }

    if let Some(path) = report {
        save_report(summary, path)?;
        info!("Wrote report to {path}");
        eprintln!("  Report: {}", style(path).green());
    }

    Ok(())
}
