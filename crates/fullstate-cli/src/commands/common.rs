//! Shared helpers for CLI commands.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use fullstate_ir::Circuit;
use fullstate_ir::bits::format_tuple;
use fullstate_sim::{SimConfig, SimulationResult};

/// Read a file, failing early with a readable message when it is missing.
pub fn read_source(path: &str) -> Result<String> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Load a circuit from its text dump.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let source = read_source(path)?;
    fullstate_ir::dump::parse(&source).with_context(|| format!("Failed to parse circuit: {path}"))
}

/// Load simulator settings from a YAML or JSON file.
pub fn load_config(path: &str) -> Result<SimConfig> {
    let source = read_source(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Invalid JSON config: {path}")),
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid YAML config: {path}")),
        other => anyhow::bail!("Unknown config format '{other}'. Use .yaml, .yml or .json"),
    }
}

/// Machine-readable view of a simulation result.
#[derive(Debug, Serialize)]
pub struct Report {
    pub num_qubits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_order: Option<Vec<u32>>,
    /// Bitstring (first measured qubit leftmost) → probability.
    pub probabilities: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<u8>,
    pub measurement_probability: f64,
}

impl From<&SimulationResult> for Report {
    fn from(result: &SimulationResult) -> Self {
        let probabilities = result
            .register_probs()
            .into_iter()
            .map(|(label, p)| (bitstring(&label), p))
            .collect();
        Self {
            num_qubits: result.num_qubits(),
            measure_order: result
                .measure_order()
                .map(|order| order.iter().map(|q| q.0).collect()),
            probabilities,
            measurements: result.previous_measurements().to_vec(),
            measurement_probability: result.prob_of_previous_measurements(),
        }
    }
}

fn bitstring(label: &[u8]) -> String {
    label.iter().map(|b| if *b == 0 { '0' } else { '1' }).collect()
}

/// Print a result in the requested format (table, json).
pub fn print_result(result: &SimulationResult, format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&Report::from(result))
                .context("JSON serialization failed")?;
            println!("{json}");
        }
        "table" => print_table(result),
        other => anyhow::bail!("Unknown output format '{other}'. Available: table, json"),
    }
    Ok(())
}

fn print_table(result: &SimulationResult) {
    let order = match result.measure_order() {
        Some(order) => {
            let order: Vec<String> = order.iter().map(ToString::to_string).collect();
            format!(" (measure order {})", order.join(", "))
        }
        None => String::new(),
    };
    println!("\n{} Probabilities{}:", style("✓").green().bold(), order);

    let probs = result.register_probs();
    for (label, p) in probs.iter().take(32) {
        let bar: String = "█".repeat((p * 50.0).round() as usize);
        println!(
            "  {}: {:>8.5} {}",
            style(format_tuple(label)).cyan(),
            p,
            style(bar).green()
        );
    }
    if probs.len() > 32 {
        println!("  ... and {} more outcomes", probs.len() - 32);
    }

    if !result.previous_measurements().is_empty() {
        println!(
            "\n  Sampled: {} (p = {})",
            style(format_tuple(result.previous_measurements())).yellow(),
            style(format!("{:.5}", result.prob_of_previous_measurements())).yellow()
        );
    }
}
