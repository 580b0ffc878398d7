//! Simulator settings.

use serde::{Deserialize, Serialize};

/// Settings a [`Simulator`](crate::Simulator) runs with.
///
/// Results copy the reporting fields so that queries made later agree with
/// the simulation that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Basis states at or below this probability are left out of reports.
    pub probability_threshold: f64,
    /// Decimal digits reported probabilities are rounded to.
    pub precision: u32,
    /// Widest circuit accepted.
    pub max_qubits: usize,
    /// Seed for measurement sampling; entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Set the reporting threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.probability_threshold = threshold;
        self
    }

    /// Set the reporting precision.
    #[must_use]
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    /// Set the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Fix the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            probability_threshold: 1e-10,
            precision: 5,
            max_qubits: 20,
            seed: None,
        }
    }
}
