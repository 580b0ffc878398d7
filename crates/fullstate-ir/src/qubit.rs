//! Qubit handles and circuit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CIRCUIT_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque handle naming one circuit.
///
/// Qubits carry the handle of the circuit that allocated them so that a gate
/// application can be checked against the circuit it is recorded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircuitId(pub u64);

impl CircuitId {
    /// Issue a fresh, process-unique id.
    pub(crate) fn fresh() -> Self {
        CircuitId(NEXT_CIRCUIT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a qubit within its circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

/// A qubit allocated by a [`Circuit`](crate::Circuit).
///
/// The qubit does not own or borrow its circuit; it only remembers the
/// circuit's [`CircuitId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// Index into the owning circuit's bit array.
    pub id: QubitId,
    /// The circuit that allocated this qubit.
    pub circuit: CircuitId,
}

impl Qubit {
    pub(crate) fn new(id: QubitId, circuit: CircuitId) -> Self {
        Self { id, circuit }
    }

    /// The qubit's index as a `usize`.
    #[inline]
    pub fn index(&self) -> usize {
        self.id.index()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit({})", self.id)
    }
}
