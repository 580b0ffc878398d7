//! Simulation results and the probability queries they answer.

use std::fmt;

use fullstate_ir::QubitId;
use fullstate_ir::bits::format_tuple;
use ndarray::{Array1, s};
use num_complex::Complex64;
use rand::Rng;
use tracing::trace;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::operators::Operator;
use crate::permutation::{QubitPermutation, apply_block_diagonal};
use crate::state::{self, Probabilities};

/// The state a simulation left behind, plus measurement bookkeeping.
///
/// A result starts in `|0…0⟩` and may be extended by further calls to
/// [`Simulator::continue_simulation`](crate::Simulator::continue_simulation).
#[derive(Debug, Clone)]
pub struct SimulationResult {
    psi: Array1<Complex64>,
    measure_order: Option<Vec<QubitId>>,
    measure_output: Vec<u8>,
    final_probability: f64,
    config: SimConfig,
}

impl SimulationResult {
    /// An empty (zero-qubit) result.
    pub fn new(config: SimConfig) -> Self {
        Self {
            psi: state::zero_state(0),
            measure_order: None,
            measure_output: vec![],
            final_probability: 1.0,
            config,
        }
    }

    /// Grow the state to `num_qubits`, zero-padding the new amplitudes.
    ///
    /// New qubits are appended as low-order bits, so existing amplitude `k`
    /// moves to `k << extra`.
    pub(crate) fn pad_to(&mut self, num_qubits: usize) {
        let current = self.num_qubits();
        if num_qubits <= current {
            return;
        }
        let extra = num_qubits - current;
        let mut padded = Array1::zeros(1 << num_qubits);
        padded.slice_mut(s![..;1 << extra]).assign(&self.psi);
        trace!("Padded state from {} to {} qubits", current, num_qubits);
        self.psi = padded;
    }

    /// Apply a local operator to `bits`, in the operator's bit order.
    pub(crate) fn apply_operator(&mut self, op: &Operator, bits: &[usize]) {
        let perm = QubitPermutation::targets_low(bits, self.num_qubits());
        let mut permuted = perm.apply(&self.psi);
        apply_block_diagonal(op, &mut permuted);
        self.psi = perm.apply_inverse(&permuted);
    }

    pub(crate) fn set_measure_order(&mut self, order: Option<Vec<QubitId>>) {
        self.measure_order = order;
    }

    fn check_qubit(&self, qubit: QubitId) -> SimResult<usize> {
        let index = qubit.index();
        if index >= self.num_qubits() {
            return Err(SimError::QubitOutOfRange {
                qubit: index,
                num_qubits: self.num_qubits(),
            });
        }
        Ok(index)
    }

    /// Number of simulated qubits.
    pub fn num_qubits(&self) -> usize {
        state::num_qubits_of(&self.psi)
    }

    /// The raw amplitudes, index `k` labelled by `to_tuple_be(k, n)`.
    pub fn state_vector(&self) -> &Array1<Complex64> {
        &self.psi
    }

    /// Qubit order of the trailing measurement block, if one was simulated.
    pub fn measure_order(&self) -> Option<&[QubitId]> {
        self.measure_order.as_deref()
    }

    /// Configuration the result reports with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Probability that `qubit` reads `state`.
    ///
    /// Normalized by the total weight of the vector, so collapsed states
    /// answer correctly without renormalization.
    pub fn prob_of_measure_bit(&self, qubit: QubitId, state: u8) -> SimResult<f64> {
        let index = self.check_qubit(qubit)?;
        Ok(state::probability_of_measure(&self.psi, index, state))
    }

    /// Probability of the basis state with big-endian index `index`.
    pub fn probability_of_state(&self, index: usize) -> f64 {
        if index >= self.psi.len() {
            return 0.0;
        }
        state::probability_of_state(&self.psi, index)
    }

    /// Outcome distribution of measuring every qubit.
    ///
    /// Labels follow `measure_order` when it is set and qubit index order
    /// otherwise.
    pub fn register_probs(&self) -> Probabilities {
        let threshold = self.config.probability_threshold;
        let precision = self.config.precision;
        match &self.measure_order {
            Some(order) => {
                let order: Vec<usize> = order.iter().map(|q| q.index()).collect();
                let perm = QubitPermutation::leading(&order, self.num_qubits());
                state::exact_measure_results(&perm.apply(&self.psi), threshold, precision)
            }
            None => state::exact_measure_results(&self.psi, threshold, precision),
        }
    }

    /// Sample `qubit`, collapsing the state.
    ///
    /// Returns the outcome and the probability it had. The state is left
    /// unnormalized.
    pub fn measure_bit<R: Rng + ?Sized>(&mut self, qubit: QubitId, rng: &mut R) -> SimResult<(u8, f64)> {
        let index = self.check_qubit(qubit)?;
        let (bit, prob_zero) = state::measure(&mut self.psi, index, rng);
        let prob = if bit == 0 { prob_zero } else { 1.0 - prob_zero };
        self.measure_output.push(bit);
        self.final_probability *= prob;
        trace!("Measured qubit {} = {} (p = {:.5})", index, bit, prob);
        Ok((bit, prob))
    }

    /// Outcomes sampled so far, in sampling order.
    pub fn previous_measurements(&self) -> &[u8] {
        &self.measure_output
    }

    /// Joint probability of the outcomes sampled so far.
    pub fn prob_of_previous_measurements(&self) -> f64 {
        self.final_probability
    }
}

impl Default for SimulationResult {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FullState({} qubits", self.num_qubits())?;
        if let Some(order) = &self.measure_order {
            let order: Vec<String> = order.iter().map(ToString::to_string).collect();
            write!(f, ", measure order [{}]", order.join(", "))?;
        }
        writeln!(f, ")")?;
        for (label, p) in self.register_probs() {
            writeln!(f, "  {}: {}", format_tuple(&label), p)?;
        }
        Ok(())
    }
}
