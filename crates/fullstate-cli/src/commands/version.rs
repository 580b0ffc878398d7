//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - dense state-vector simulation of small quantum circuits",
        style("fullstate").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  fullstate-ir   Qubits, gates and circuit history");
    println!("  fullstate-sim  State-vector simulation engine");
    println!("  fullstate-cli  Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
