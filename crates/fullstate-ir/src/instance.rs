//! Recorded gate applications.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::qubit::QubitId;

/// One entry of a circuit's history: a gate applied to specific qubits.
///
/// `bits` keeps the order in which the qubits were supplied; for controlled
/// gates the controls come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateInstance {
    /// Gate name.
    pub name: Cow<'static, str>,
    /// Bound parameters, empty for parameterless gates.
    pub args: Vec<f64>,
    /// Target qubits in application order.
    pub bits: Vec<QubitId>,
    /// Copied from the gate's flags.
    pub divergent: bool,
    /// Copied from the gate's flags.
    pub measurement: bool,
}

impl GateInstance {
    /// Whether this instance was produced by the gate called `name`,
    /// regardless of its parameters.
    #[inline]
    pub fn instance_of(&self, name: &str) -> bool {
        self.name == name
    }

    /// Check if this is a measurement.
    #[inline]
    pub fn is_measure(&self) -> bool {
        self.measurement
    }
}

impl fmt::Display for GateInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: Vec<String> = self.bits.iter().map(QubitId::to_string).collect();
        if self.args.is_empty() {
            write!(f, "{}({})", self.name, bits.join(", "))
        } else {
            let args: Vec<String> = self.args.iter().map(f64::to_string).collect();
            write!(f, "{}_{}({})", self.name, args.join(","), bits.join(", "))
        }
    }
}
