//! Helpers over raw state vectors.
//!
//! Amplitude index `k` of an `n`-qubit state belongs to the big-endian bit
//! tuple `to_tuple_be(k, n)`: qubit 0 is the most significant bit. None of
//! these functions require the state to be normalized.

use fullstate_ir::bits::to_tuple_be;
use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;
use std::collections::BTreeMap;

/// Basis-state label → probability.
pub type Probabilities = BTreeMap<Vec<u8>, f64>;

/// Number of qubits of a state vector of length `2^n`.
#[inline]
pub fn num_qubits_of(psi: &Array1<Complex64>) -> usize {
    psi.len().trailing_zeros() as usize
}

/// `|0…0⟩` on `num_qubits` qubits.
pub fn zero_state(num_qubits: usize) -> Array1<Complex64> {
    let mut psi = Array1::zeros(1 << num_qubits);
    psi[0] = Complex64::new(1.0, 0.0);
    psi
}

/// Tensor product of single-qubit states, qubit 0 first.
pub fn product_state(bit_states: &[Array1<Complex64>]) -> Array1<Complex64> {
    bit_states.iter().fold(Array1::from_elem(1, Complex64::new(1.0, 0.0)), |acc, b| {
        Array1::from_shape_fn(acc.len() * b.len(), |i| acc[i / b.len()] * b[i % b.len()])
    })
}

/// Unnormalized uniform superposition: every amplitude is 1.
pub fn uniform_superposition(num_qubits: usize) -> Array1<Complex64> {
    Array1::from_elem(1 << num_qubits, Complex64::new(1.0, 0.0))
}

#[inline]
fn qubit_mask(qubit: usize, num_qubits: usize) -> usize {
    1 << (num_qubits - 1 - qubit)
}

fn total_weight(psi: &Array1<Complex64>) -> f64 {
    psi.iter().map(Complex64::norm_sqr).sum()
}

/// Probability that `qubit` reads `state`.
///
/// A zero vector has no outcomes and reports 0 for both states.
pub fn probability_of_measure(psi: &Array1<Complex64>, qubit: usize, state: u8) -> f64 {
    let mask = qubit_mask(qubit, num_qubits_of(psi));
    let want = state != 0;
    let total = total_weight(psi);
    if total == 0.0 {
        return 0.0;
    }
    let matching: f64 = psi
        .iter()
        .enumerate()
        .filter(|(i, _)| (i & mask != 0) == want)
        .map(|(_, a)| a.norm_sqr())
        .sum();
    matching / total
}

/// Probability of the single basis state `index`.
pub fn probability_of_state(psi: &Array1<Complex64>, index: usize) -> f64 {
    let total = total_weight(psi);
    if total == 0.0 {
        return 0.0;
    }
    psi[index].norm_sqr() / total
}

/// Measure `qubit` in place.
///
/// Draws a uniform number against the probability of reading 0, zeroes the
/// amplitudes that disagree with the outcome and leaves the state
/// unnormalized. Returns the outcome and the probability of reading 0.
pub fn measure<R: Rng + ?Sized>(psi: &mut Array1<Complex64>, qubit: usize, rng: &mut R) -> (u8, f64) {
    let prob_zero = probability_of_measure(psi, qubit, 0);
    let outcome = u8::from(rng.r#gen::<f64>() >= prob_zero);
    let mask = qubit_mask(qubit, num_qubits_of(psi));
    let keep_set = outcome == 1;
    for (i, amp) in psi.iter_mut().enumerate() {
        if (i & mask != 0) != keep_set {
            *amp = Complex64::new(0.0, 0.0);
        }
    }
    (outcome, prob_zero)
}

/// Exact outcome distribution of measuring every qubit.
///
/// Entries at or below `threshold` are dropped; the rest are rounded to
/// `precision` decimal digits.
pub fn exact_measure_results(psi: &Array1<Complex64>, threshold: f64, precision: u32) -> Probabilities {
    let n = num_qubits_of(psi);
    let total = total_weight(psi);
    let scale = 10f64.powi(precision as i32);
    let mut out = Probabilities::new();
    if total == 0.0 {
        return out;
    }
    for (k, amp) in psi.iter().enumerate() {
        let p = amp.norm_sqr() / total;
        if p > threshold {
            out.insert(to_tuple_be(k as u64, n), (p * scale).round() / scale);
        }
    }
    out
}
