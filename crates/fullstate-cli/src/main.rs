//! fullstate Command-Line Interface
//!
//! Runs dumped circuits through the state-vector simulator and prints the
//! resulting outcome probabilities.
//!
//! ```text
//! $ fullstate demo bell
//! → Simulating bell (2 qubits, 4 instructions)
//!
//! ✓ Probabilities (measure order 0, 1):
//!   (0, 0):  0.50000 █████████████████████████
//!   (1, 1):  0.50000 █████████████████████████
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{demo, gates, run, show, version};

/// fullstate - dense state-vector simulation of small quantum circuits
#[derive(Parser)]
#[command(name = "fullstate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a circuit dump and print outcome probabilities
    Run {
        /// Circuit dump, one gate per line
        #[arg(short, long)]
        input: String,

        /// Simulator settings (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Skip measurement gates instead of validating them
        #[arg(long)]
        ignore_measurements: bool,

        /// Sample the measured qubits after simulation
        #[arg(long)]
        collapse: bool,
    },

    /// Simulate a built-in circuit
    Demo {
        /// Circuit to build (bell, ghz)
        name: String,

        /// Number of qubits for ghz
        #[arg(short, long, default_value = "3")]
        qubits: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print a circuit dump with angles rendered as fractions of π
    Show {
        /// Circuit dump, one gate per line
        #[arg(short, long)]
        input: String,

        /// Render angles as LaTeX
        #[arg(long)]
        latex: bool,
    },

    /// List the gate catalog
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            input,
            config,
            format,
            ignore_measurements,
            collapse,
        } => run::execute(
            &input,
            config.as_deref(),
            &format,
            ignore_measurements,
            collapse,
        ),

        Commands::Demo {
            name,
            qubits,
            format,
        } => demo::execute(&name, qubits, &format),

        Commands::Show { input, latex } => show::execute(&input, latex),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
