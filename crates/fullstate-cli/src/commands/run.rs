//! Run command implementation.

use std::time::Instant;

use anyhow::Result;
use console::style;
use tracing::info;

use fullstate_sim::{SimConfig, SimOptions, Simulator};

use super::common::{load_circuit, load_config, print_result};

/// Execute the run command.
pub fn execute(
    input: &str,
    config: Option<&str>,
    format: &str,
    ignore_measurements: bool,
    collapse: bool,
) -> Result<()> {
    let circuit = load_circuit(input)?;
    let config = match config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    info!("Simulator config: {:?}", config);

    if format == "table" {
        println!(
            "{} Running {} ({} qubits, {} instructions)",
            style("→").cyan().bold(),
            style(input).green(),
            circuit.num_qubits(),
            circuit.history().len()
        );
    }

    let mut options = SimOptions::default();
    if ignore_measurements {
        options = options.ignoring_measurements();
    }
    if collapse {
        options = options.collapsing();
    }

    let start = Instant::now();
    let result = Simulator::with_config(config).simulate_with(&circuit, &options)?;
    info!("Simulated in {:?}", start.elapsed());

    print_result(&result, format)
}
