//! Gates command implementation.

use console::style;

use fullstate_ir::catalog;

/// Execute the gates command.
pub fn execute() {
    println!("{} Gate catalog:\n", style("fullstate").cyan().bold());
    println!("  {:<8} {:>6} {:>6}  flags", "name", "qubits", "args");
    for kind in catalog::all() {
        let flags = kind.flags();
        let mut notes = vec![];
        if flags.measurement {
            notes.push("measurement");
        }
        if flags.divergent {
            notes.push("divergent");
        }
        println!(
            "  {:<8} {:>6} {:>6}  {}",
            style(kind.name()).bold(),
            kind.size(),
            kind.num_args(),
            style(notes.join(", ")).dim()
        );
    }
    println!("\n  Aliases: CNOT = CX, TOFF = CCX");
}
