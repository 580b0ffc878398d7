//! Gate kinds and the call surface that records them into a circuit.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::bits::BitMask;
use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::instance::GateInstance;
use crate::qubit::{Qubit, QubitId};

/// Informational and behavioural flags of a gate kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateFlags {
    /// The gate creates or depends on superposition. Informational only.
    pub divergent: bool,
    /// The gate collapses the state.
    pub measurement: bool,
}

impl GateFlags {
    /// No flags set.
    pub const NONE: GateFlags = GateFlags {
        divergent: false,
        measurement: false,
    };
    /// Superposition-producing gate.
    pub const DIVERGENT: GateFlags = GateFlags {
        divergent: true,
        measurement: false,
    };
    /// Measurement gate.
    pub const MEASUREMENT: GateFlags = GateFlags {
        divergent: false,
        measurement: true,
    };
}

/// A gate that can be applied to qubits directly.
///
/// Either a catalog gate without parameters, or a [`GenericGate`] that has
/// been bound to concrete parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedGate {
    name: Cow<'static, str>,
    size: u32,
    args: Vec<f64>,
    flags: GateFlags,
}

impl FixedGate {
    /// Declare a parameterless gate.
    pub const fn new(name: &'static str, size: u32, flags: GateFlags) -> Self {
        Self {
            name: Cow::Borrowed(name),
            size,
            args: Vec::new(),
            flags,
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits this gate acts on.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bound parameter values, empty for parameterless gates.
    #[inline]
    pub fn args(&self) -> &[f64] {
        &self.args
    }

    /// Gate flags.
    #[inline]
    pub fn flags(&self) -> GateFlags {
        self.flags
    }

    /// Whether this is a measurement gate.
    #[inline]
    pub fn is_measurement(&self) -> bool {
        self.flags.measurement
    }

    /// Record this gate against the given qubit indices.
    pub fn instance(&self, bits: impl IntoIterator<Item = QubitId>) -> GateInstance {
        GateInstance {
            name: self.name.clone(),
            args: self.args.clone(),
            bits: bits.into_iter().collect(),
            divergent: self.flags.divergent,
            measurement: self.flags.measurement,
        }
    }

    /// Apply the gate.
    ///
    /// A single-qubit gate is broadcast: one instance is recorded per qubit.
    /// A wider gate records one instance over all of `bits`, which must
    /// match its size exactly.
    pub fn apply(&self, circuit: &mut Circuit, bits: &[Qubit]) -> IrResult<()> {
        if self.size == 1 {
            circuit.check_owned(bits, Some(self.name()))?;
            for bit in bits {
                circuit.apply_gate(self, std::slice::from_ref(bit))?;
            }
            Ok(())
        } else {
            circuit.apply_gate(self, bits)
        }
    }

    /// Apply a single-qubit gate to the qubits selected by `mask`.
    pub fn apply_masked(&self, circuit: &mut Circuit, bits: &[Qubit], mask: BitMask) -> IrResult<()> {
        if self.size != 1 {
            return Err(IrError::MaskOnMultiQubitGate(self.name.to_string()));
        }
        circuit.check_owned(bits, Some(self.name()))?;
        let flags = mask.to_flags(bits.len());
        for (bit, flag) in bits.iter().zip(flags) {
            if flag != 0 {
                circuit.apply_gate(self, std::slice::from_ref(bit))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FixedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            let args: Vec<String> = self.args.iter().map(f64::to_string).collect();
            write!(f, "{}_{}", self.name, args.join(","))
        }
    }
}

/// A parametrized gate that must be bound before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericGate {
    name: Cow<'static, str>,
    size: u32,
    num_args: u32,
    flags: GateFlags,
}

impl GenericGate {
    /// Declare a parametrized gate.
    pub const fn new(name: &'static str, size: u32, num_args: u32, flags: GateFlags) -> Self {
        Self {
            name: Cow::Borrowed(name),
            size,
            num_args,
            flags,
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits this gate acts on.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of parameters the gate expects.
    #[inline]
    pub fn num_args(&self) -> u32 {
        self.num_args
    }

    /// Bind parameter values, producing an applicable gate.
    pub fn bind(&self, args: &[f64]) -> IrResult<FixedGate> {
        if args.len() != self.num_args as usize {
            return Err(IrError::ArgumentCountMismatch {
                gate_name: self.name.to_string(),
                expected: self.num_args,
                got: args.len() as u32,
            });
        }
        Ok(FixedGate {
            name: self.name.clone(),
            size: self.size,
            args: args.to_vec(),
            flags: self.flags,
        })
    }
}

/// Any catalog gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Applicable directly.
    Fixed(FixedGate),
    /// Must be bound to parameters first.
    Generic(GenericGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Fixed(g) => g.name(),
            GateKind::Generic(g) => g.name(),
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn size(&self) -> u32 {
        match self {
            GateKind::Fixed(g) => g.size(),
            GateKind::Generic(g) => g.size(),
        }
    }

    /// Number of parameters still to be supplied.
    pub fn num_args(&self) -> u32 {
        match self {
            GateKind::Fixed(_) => 0,
            GateKind::Generic(g) => g.num_args(),
        }
    }

    /// Gate flags.
    pub fn flags(&self) -> GateFlags {
        match self {
            GateKind::Fixed(g) => g.flags,
            GateKind::Generic(g) => g.flags,
        }
    }

    /// Produce an applicable gate from `args`.
    ///
    /// Fixed gates accept only an empty argument list.
    pub fn bind(&self, args: &[f64]) -> IrResult<FixedGate> {
        match self {
            GateKind::Fixed(g) if args.is_empty() => Ok(g.clone()),
            GateKind::Fixed(g) => Err(IrError::ArgumentCountMismatch {
                gate_name: g.name.to_string(),
                expected: 0,
                got: args.len() as u32,
            }),
            GateKind::Generic(g) => g.bind(args),
        }
    }
}

impl From<FixedGate> for GateKind {
    fn from(gate: FixedGate) -> Self {
        GateKind::Fixed(gate)
    }
}

impl From<GenericGate> for GateKind {
    fn from(gate: GenericGate) -> Self {
        GateKind::Generic(gate)
    }
}
