//! fullstate simulation engine
//!
//! Replays the history of a [`fullstate_ir::Circuit`] against a dense state
//! vector. Each gate's local operator is looked up in an [`OperatorTable`],
//! its target qubits are permuted into the lowest-order positions, the
//! operator is applied block-diagonally and the permutation is undone.
//!
//! # Example: Bell State Probabilities
//!
//! ```rust
//! use fullstate_ir::Circuit;
//! use fullstate_sim::Simulator;
//!
//! let circuit = Circuit::bell().unwrap();
//! let result = Simulator::new().simulate(&circuit).unwrap();
//! let probs = result.register_probs();
//!
//! assert_eq!(probs.len(), 2);
//! assert_eq!(probs[&vec![0, 0]], 0.5);
//! assert_eq!(probs[&vec![1, 1]], 0.5);
//! ```
//!
//! # Measurement
//!
//! Measurement gates are only accepted as one trailing block that measures
//! every qubit exactly once. Its order becomes the result's
//! [`measure_order`](SimulationResult::measure_order), which labels the
//! probabilities. Gates are always applied to the full superposition;
//! [`SimOptions::collapse`] additionally samples the block afterwards.

pub mod config;
pub mod error;
pub mod operators;
pub mod permutation;
pub mod result;
pub mod simulator;
pub mod state;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use operators::{Operator, OperatorTable};
pub use result::SimulationResult;
pub use simulator::{SimOptions, Simulator};
pub use state::Probabilities;
