//! Unitary operators for catalog gates.
//!
//! Operators act on the gate's own qubits only, `2^size × 2^size`, with the
//! gate's first qubit as the most significant bit of the local index. For
//! controlled gates the controls therefore come first.

use ndarray::{Array2, arr2, s};
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use crate::error::{SimError, SimResult};

/// A dense gate matrix.
pub type Operator = Array2<Complex64>;

/// Builds an operator from already length-checked parameters.
pub type OperatorGenerator = fn(&[f64]) -> Operator;

/// How a gate name resolves to a matrix.
#[derive(Debug, Clone)]
pub enum OperatorEntry {
    /// A parameterless gate's matrix.
    Fixed(Operator),
    /// A parametrized gate's matrix builder.
    Generator {
        /// Number of parameters the builder reads.
        num_args: usize,
        /// The builder.
        generate: OperatorGenerator,
    },
}

/// Mapping from gate name to operator, populated once.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    entries: FxHashMap<String, OperatorEntry>,
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

#[inline]
fn re(v: f64) -> Complex64 {
    Complex64::new(v, 0.0)
}

fn diag(d0: Complex64, d1: Complex64) -> Operator {
    arr2(&[[d0, ZERO], [ZERO, d1]])
}

/// Block-diagonal `diag(I, u)`: one control qubit prepended to `u`.
pub fn controlled(u: &Operator) -> Operator {
    let d = u.nrows();
    let mut m = Operator::eye(2 * d);
    m.slice_mut(s![d.., d..]).assign(u);
    m
}

/// Identity on `num_qubits` qubits.
pub fn identity(num_qubits: usize) -> Operator {
    Operator::eye(1 << num_qubits)
}

/// Pauli-X (bit flip).
pub fn pauli_x() -> Operator {
    arr2(&[[ZERO, ONE], [ONE, ZERO]])
}

/// Pauli-Y.
pub fn pauli_y() -> Operator {
    arr2(&[[ZERO, -I], [I, ZERO]])
}

/// Pauli-Z (phase flip).
pub fn pauli_z() -> Operator {
    diag(ONE, -ONE)
}

/// Normalized Hadamard.
pub fn hadamard() -> Operator {
    let h = re(FRAC_1_SQRT_2);
    arr2(&[[h, h], [h, -h]])
}

/// `diag(1, e^{iθ})`.
pub fn phase(theta: f64) -> Operator {
    diag(ONE, Complex64::from_polar(1.0, theta))
}

/// Two-qubit SWAP.
pub fn swap() -> Operator {
    arr2(&[
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
    ])
}

/// `[[cos θ/2, i sin θ/2], [i sin θ/2, cos θ/2]]`.
pub fn rx(args: &[f64]) -> Operator {
    let (s, c) = (args[0] / 2.0).sin_cos();
    arr2(&[[re(c), I * s], [I * s, re(c)]])
}

/// `[[cos θ/2, sin θ/2], [-sin θ/2, cos θ/2]]`.
pub fn ry(args: &[f64]) -> Operator {
    let (s, c) = (args[0] / 2.0).sin_cos();
    arr2(&[[re(c), re(s)], [re(-s), re(c)]])
}

/// Phase rotation `diag(1, e^{iθ})`.
pub fn rz(args: &[f64]) -> Operator {
    phase(args[0])
}

/// Controlled phase rotation.
pub fn crz(args: &[f64]) -> Operator {
    controlled(&rz(args))
}

/// Doubly controlled phase rotation.
pub fn ccrz(args: &[f64]) -> Operator {
    controlled(&crz(args))
}

impl OperatorTable {
    /// Create a table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the table covering every catalog gate except `M`.
    pub fn standard() -> Self {
        let mut table = Self::empty();

        // Single-qubit gates
        table.insert_fixed("I1", identity(1));
        table.insert_fixed("X", pauli_x());
        table.insert_fixed("Y", pauli_y());
        table.insert_fixed("Z", pauli_z());
        table.insert_fixed("H", hadamard());
        table.insert_fixed("S", diag(ONE, I));
        table.insert_fixed("Sd", diag(ONE, -I));
        table.insert_fixed("T", phase(FRAC_PI_4));
        table.insert_fixed("Td", phase(-FRAC_PI_4));
        table.insert_generator("Rx", 1, rx);
        table.insert_generator("Ry", 1, ry);
        table.insert_generator("Rz", 1, rz);

        // Two-qubit gates
        table.insert_fixed("I2", identity(2));
        table.insert_fixed("SWAP", swap());
        table.insert_fixed("CX", controlled(&pauli_x()));
        table.insert_fixed("CY", controlled(&pauli_y()));
        table.insert_fixed("CZ", controlled(&pauli_z()));
        table.insert_fixed("CS", controlled(&diag(ONE, I)));
        table.insert_fixed("CSd", controlled(&diag(ONE, -I)));
        table.insert_fixed("CT", controlled(&phase(FRAC_PI_4)));
        table.insert_fixed("CTd", controlled(&phase(-FRAC_PI_4)));
        table.insert_generator("CRz", 1, crz);

        // Three-qubit gates
        table.insert_fixed("I3", identity(3));
        table.insert_fixed("CSWAP", controlled(&swap()));
        table.insert_fixed("CCX", controlled(&controlled(&pauli_x())));
        table.insert_generator("CCRz", 1, ccrz);

        table
    }

    /// Register a parameterless gate's matrix.
    pub fn insert_fixed(&mut self, name: impl Into<String>, op: Operator) {
        self.entries.insert(name.into(), OperatorEntry::Fixed(op));
    }

    /// Register a parametrized gate's matrix builder.
    pub fn insert_generator(
        &mut self,
        name: impl Into<String>,
        num_args: usize,
        generate: OperatorGenerator,
    ) {
        self.entries
            .insert(name.into(), OperatorEntry::Generator { num_args, generate });
    }

    /// Check whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a gate instance's operator.
    pub fn resolve(&self, name: &str, args: &[f64]) -> SimResult<Operator> {
        match self.entries.get(name) {
            None => Err(SimError::UnsupportedGate {
                name: name.to_string(),
                args: args.to_vec(),
            }),
            Some(OperatorEntry::Fixed(op)) if args.is_empty() => Ok(op.clone()),
            Some(OperatorEntry::Generator { num_args, generate }) if args.len() == *num_args => {
                Ok(generate(args))
            }
            Some(_) => Err(SimError::InvalidGateArguments {
                name: name.to_string(),
                args: args.to_vec(),
            }),
        }
    }
}
