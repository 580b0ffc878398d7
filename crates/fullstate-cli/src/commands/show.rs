//! Show command implementation.

use anyhow::Result;

use fullstate_ir::GateInstance;
use fullstate_ir::angle::{angle_to_latex, angle_to_str};

use super::common::load_circuit;

/// Render one instance with readable angles.
pub fn render(instance: &GateInstance, latex: bool) -> String {
    let bits: Vec<String> = instance.bits.iter().map(ToString::to_string).collect();
    if instance.args.is_empty() {
        return format!("{}({})", instance.name, bits.join(", "));
    }
    let args: Vec<String> = instance
        .args
        .iter()
        .map(|&a| if latex { angle_to_latex(a) } else { angle_to_str(a) })
        .collect();
    format!("{}[{}]({})", instance.name, args.join(", "), bits.join(", "))
}

/// Execute the show command.
pub fn execute(input: &str, latex: bool) -> Result<()> {
    let circuit = load_circuit(input)?;
    for instance in circuit.history() {
        println!("{}", render(instance, latex));
    }
    Ok(())
}
