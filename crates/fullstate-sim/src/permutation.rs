//! Qubit permutations and block-diagonal operator expansion.
//!
//! A gate acting on `k` of `n` qubits is applied by permuting its targets into
//! the `k` lowest-order positions, multiplying by the block-diagonal
//! expansion `I ⊗ U`, and permuting back.

use ndarray::{Array1, Array2, Axis, s};
use num_complex::Complex64;

/// A reordering of the qubits of an `n`-qubit state.
///
/// Position `i` (0 = most significant) of the permuted state holds the bit
/// of qubit `map[i]` of the original state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QubitPermutation {
    map: Vec<usize>,
}

impl QubitPermutation {
    /// Create from an explicit position → qubit map.
    ///
    /// `map` must contain every index below `map.len()` exactly once.
    pub fn new(map: Vec<usize>) -> Self {
        debug_assert!({
            let mut sorted = map.clone();
            sorted.sort_unstable();
            sorted.iter().enumerate().all(|(i, &q)| i == q)
        });
        Self { map }
    }

    /// Move `targets` to the lowest-order positions, keeping their relative
    /// order; every other qubit fills the high positions in ascending order.
    pub fn targets_low(targets: &[usize], num_qubits: usize) -> Self {
        let mut map: Vec<usize> = (0..num_qubits).filter(|q| !targets.contains(q)).collect();
        map.extend_from_slice(targets);
        Self::new(map)
    }

    /// Move `order` to the highest-order positions, followed by the
    /// remaining qubits in ascending order.
    pub fn leading(order: &[usize], num_qubits: usize) -> Self {
        let mut map = order.to_vec();
        map.extend((0..num_qubits).filter(|q| !order.contains(q)));
        Self::new(map)
    }

    /// Number of qubits permuted.
    pub fn num_qubits(&self) -> usize {
        self.map.len()
    }

    /// Basis index of the permuted state holding original basis index `x`.
    pub fn map_index(&self, x: usize) -> usize {
        let n = self.map.len();
        self.map.iter().enumerate().fold(0, |acc, (i, &q)| {
            let bit = (x >> (n - 1 - q)) & 1;
            acc | (bit << (n - 1 - i))
        })
    }

    /// Permute a state vector.
    pub fn apply(&self, psi: &Array1<Complex64>) -> Array1<Complex64> {
        let mut out = Array1::zeros(psi.len());
        for (x, &amp) in psi.iter().enumerate() {
            out[self.map_index(x)] = amp;
        }
        out
    }

    /// Undo [`apply`](Self::apply).
    pub fn apply_inverse(&self, psi: &Array1<Complex64>) -> Array1<Complex64> {
        Array1::from_shape_fn(psi.len(), |x| psi[self.map_index(x)])
    }

    /// The permutation as a dense `2^n × 2^n` matrix.
    pub fn to_matrix(&self) -> Array2<Complex64> {
        let dim = 1 << self.map.len();
        let mut m = Array2::zeros((dim, dim));
        for x in 0..dim {
            m[[self.map_index(x), x]] = Complex64::new(1.0, 0.0);
        }
        m
    }
}

/// Block-diagonal expansion of `op` to `num_qubits` qubits as a dense matrix.
pub fn expand_operator(op: &Array2<Complex64>, num_qubits: usize) -> Array2<Complex64> {
    let block = op.nrows();
    let dim = 1 << num_qubits;
    let mut out = Array2::zeros((dim, dim));
    for start in (0..dim).step_by(block) {
        out.slice_mut(s![start..start + block, start..start + block])
            .assign(op);
    }
    out
}

/// Multiply `psi` in place by the block-diagonal expansion of `op`.
pub fn apply_block_diagonal(op: &Array2<Complex64>, psi: &mut Array1<Complex64>) {
    let block = op.nrows();
    for mut chunk in psi.axis_chunks_iter_mut(Axis(0), block) {
        let updated = op.dot(&chunk);
        chunk.assign(&updated);
    }
}
