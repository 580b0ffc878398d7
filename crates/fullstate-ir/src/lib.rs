//! fullstate circuit representation
//!
//! This crate holds everything needed to *describe* a small quantum circuit:
//! the gate catalog, the [`Circuit`] that records gate applications into an
//! ordered history, and the qubit/register/ancilla allocation scheme. The
//! companion `fullstate-sim` crate replays that history against a state
//! vector.
//!
//! # Core Components
//!
//! - **Qubits**: [`Qubit`] handles carry their index and the [`CircuitId`] of
//!   the circuit that allocated them
//! - **Gates**: [`FixedGate`] for directly applicable gates and
//!   [`GenericGate`] for parametrized ones, both listed in [`catalog`]
//! - **History**: [`GateInstance`] records, one per application
//! - **Circuit**: [`Circuit`] with registers and ancilla borrowing
//! - **Utilities**: [`bits`] for bit-order conversions, [`angle`] for angle
//!   rendering, [`dump`] for reading the text format back
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use fullstate_ir::Circuit;
//! use fullstate_ir::catalog::{CX, H, M};
//!
//! let mut circuit = Circuit::new();
//! let q = circuit.new_register(2, None).unwrap();
//!
//! H.apply(&mut circuit, &q[..1]).unwrap();
//! CX.apply(&mut circuit, &q).unwrap();
//! M.apply(&mut circuit, &q).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.history().len(), 4);
//! assert_eq!(circuit.to_string(), "H(0)\nCX(0, 1)\nM(0)\nM(1)\n");
//! ```
//!
//! # Example: Parametrized Gate
//!
//! ```rust
//! use fullstate_ir::Circuit;
//! use fullstate_ir::catalog::RZ;
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::with_size(1);
//! let q = circuit.qubits().to_vec();
//!
//! RZ.bind(&[PI / 4.0]).unwrap().apply(&mut circuit, &q).unwrap();
//! assert_eq!(circuit.history()[0].args, vec![PI / 4.0]);
//! ```

pub mod angle;
pub mod bits;
pub mod catalog;
pub mod circuit;
pub mod config;
pub mod dump;
pub mod error;
pub mod gate;
pub mod instance;
pub mod qubit;

pub use bits::{BitMask, Endian};
pub use circuit::{Circuit, Register};
pub use config::CircuitConfig;
pub use error::{IrError, IrResult};
pub use gate::{FixedGate, GateFlags, GateKind, GenericGate};
pub use instance::GateInstance;
pub use qubit::{CircuitId, Qubit, QubitId};
