//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// No operator is registered under the gate's name.
    #[error("Unsupported gate '{name}' with arguments {args:?}")]
    UnsupportedGate {
        /// Gate name.
        name: String,
        /// Arguments the instance carried.
        args: Vec<f64>,
    },

    /// The operator exists but cannot be built from these arguments.
    #[error("Invalid gate arguments {args:?} for '{name}'")]
    InvalidGateArguments {
        /// Gate name.
        name: String,
        /// Arguments the instance carried.
        args: Vec<f64>,
    },

    /// The operator's dimension does not fit the number of target qubits.
    #[error("Operator for '{name}' is {got}x{got}, but it targets {num_bits} qubits")]
    OperatorShape {
        /// Gate name.
        name: String,
        /// Operator dimension.
        got: usize,
        /// Number of qubits the instance targets.
        num_bits: usize,
    },

    /// Measurement gates are only supported as one trailing block covering
    /// every qubit exactly once.
    #[error("Unsupported arrangement of measurement gates: {0}")]
    UnsupportedMeasurement(String),

    /// A qubit index lies outside the simulated register.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit state")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Number of simulated qubits.
        num_qubits: usize,
    },

    /// The circuit is too wide for a dense state vector.
    #[error("Circuit has {num_qubits} qubits but the simulator only supports {max}")]
    TooManyQubits {
        /// Qubits in the circuit.
        num_qubits: usize,
        /// Configured limit.
        max: usize,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] fullstate_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
