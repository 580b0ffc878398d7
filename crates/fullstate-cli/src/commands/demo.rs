//! Demo command implementation.

use anyhow::Result;
use console::style;

use fullstate_ir::Circuit;
use fullstate_sim::Simulator;

use super::common::print_result;

/// Execute the demo command.
pub fn execute(name: &str, qubits: u32, format: &str) -> Result<()> {
    let circuit = match name.to_lowercase().as_str() {
        "bell" => Circuit::bell()?,
        "ghz" => {
            if qubits == 0 {
                anyhow::bail!("ghz needs at least one qubit");
            }
            Circuit::ghz(qubits)?
        }
        other => anyhow::bail!("Unknown demo: '{other}'. Available: bell, ghz"),
    };

    if format == "table" {
        println!(
            "{} Simulating {} ({} qubits, {} instructions)",
            style("→").cyan().bold(),
            style(name).green(),
            circuit.num_qubits(),
            circuit.history().len()
        );
    }

    let result = Simulator::new().simulate(&circuit)?;
    print_result(&result, format)
}
