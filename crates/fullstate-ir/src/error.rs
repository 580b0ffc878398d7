//! Error types for the IR crate.

use crate::qubit::{CircuitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Generic gate bound with the wrong number of parameters.
    #[error("Gate '{gate_name}' takes {expected} arguments, got {got}")]
    ArgumentCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of arguments.
        expected: u32,
        /// Actual number of arguments provided.
        got: u32,
    },

    /// A qubit was handed to a circuit that did not allocate it.
    #[error("Qubit {qubit} belongs to circuit {owner}, not circuit {circuit}{}", format_gate_context(.gate_name))]
    ForeignQubit {
        /// The offending qubit.
        qubit: QubitId,
        /// The circuit that allocated the qubit.
        owner: CircuitId,
        /// The circuit the qubit was applied to.
        circuit: CircuitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Duplicate qubit in a multi-qubit application.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A bitmask was given to a gate that does not broadcast.
    #[error("Gate '{0}' acts on several qubits at once and cannot take a mask")]
    MaskOnMultiQubitGate(String),

    /// Qubit returned to the ancilla pool was never borrowed as an ancilla.
    #[error("Qubit {0} is not an ancilla of this circuit")]
    NotAncilla(QubitId),

    /// A register with this name already exists.
    #[error("Register '{0}' already exists")]
    DuplicateRegister(String),

    /// Unknown gate name.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Malformed line in a circuit dump.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
