//! Circuit history and qubit allocation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::trace;

use crate::catalog;
use crate::config::CircuitConfig;
use crate::error::{IrError, IrResult};
use crate::gate::FixedGate;
use crate::instance::GateInstance;
use crate::qubit::{CircuitId, Qubit, QubitId};

/// A named group of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// Register label.
    pub name: String,
    /// Member qubits in allocation order.
    pub qubits: Vec<QubitId>,
}

/// A quantum circuit.
///
/// The circuit owns an append-only history of [`GateInstance`]s and a growing
/// array of qubits. Qubit indices are dense from 0 and never handed out twice;
/// ancilla qubits are the one exception, cycling through a pool of qubits the
/// caller has promised are back in |0⟩.
#[derive(Debug)]
pub struct Circuit {
    /// Handle stamped on every qubit this circuit allocates.
    id: CircuitId,
    /// Register naming settings.
    config: CircuitConfig,
    /// All qubits, indexed by their id.
    qubits: Vec<Qubit>,
    /// Named registers in creation order.
    registers: Vec<Register>,
    /// Every qubit ever allocated as an ancilla.
    ancilla: Vec<QubitId>,
    /// Ancilla qubits ready to be borrowed, front first.
    available_ancilla: Vec<QubitId>,
    /// Recorded gate applications.
    history: Vec<GateInstance>,
    /// Cursor into `config.register_names`.
    next_auto_name: usize,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::with_config(CircuitConfig::default())
    }

    /// Create a new empty circuit with custom settings.
    pub fn with_config(config: CircuitConfig) -> Self {
        Self {
            id: CircuitId::fresh(),
            config,
            qubits: vec![],
            registers: vec![],
            ancilla: vec![],
            available_ancilla: vec![],
            history: vec![],
            next_auto_name: 0,
        }
    }

    /// Create a circuit with `num_qubits` qubits in one auto-named register.
    pub fn with_size(num_qubits: u32) -> Self {
        let mut circuit = Self::new();
        if num_qubits > 0 {
            let qubits = circuit.allocate(num_qubits);
            let name = circuit.auto_name();
            circuit.push_register(name, &qubits);
        }
        circuit
    }

    fn allocate(&mut self, count: u32) -> Vec<Qubit> {
        let start = self.qubits.len();
        let new: Vec<Qubit> = (start..start + count as usize)
            .map(|i| Qubit::new(QubitId::from(i), self.id))
            .collect();
        self.qubits.extend_from_slice(&new);
        trace!(circuit = %self.id, start, count, "allocated qubits");
        new
    }

    fn auto_name(&mut self) -> String {
        loop {
            let k = self.next_auto_name;
            self.next_auto_name += 1;
            let name = match self.config.register_names.get(k) {
                Some(name) => name.clone(),
                None => format!(
                    "{}{}",
                    self.config.fallback_prefix,
                    k - self.config.register_names.len()
                ),
            };
            if self.register(&name).is_none() {
                return name;
            }
        }
    }

    fn push_register(&mut self, name: String, qubits: &[Qubit]) {
        self.registers.push(Register {
            name,
            qubits: qubits.iter().map(|q| q.id).collect(),
        });
    }

    /// Allocate `count` fresh qubits with consecutive indices.
    ///
    /// The qubits are recorded as a register under `name`, or under the next
    /// free name from the configured pool.
    pub fn new_register(&mut self, count: u32, name: Option<&str>) -> IrResult<Vec<Qubit>> {
        let name = match name {
            Some(name) if self.register(name).is_some() => {
                return Err(IrError::DuplicateRegister(name.to_string()));
            }
            Some(name) => name.to_string(),
            None => self.auto_name(),
        };
        let qubits = self.allocate(count);
        self.push_register(name, &qubits);
        Ok(qubits)
    }

    /// Allocate a single-qubit register.
    pub fn new_bit(&mut self, name: Option<&str>) -> IrResult<Qubit> {
        let qubits = self.new_register(1, name)?;
        Ok(qubits[0])
    }

    /// Borrow `count` ancilla qubits.
    ///
    /// The pool of returned ancilla is drained from the front; any shortfall
    /// is allocated as new ancilla qubits.
    pub fn borrow_ancilla(&mut self, count: u32) -> Vec<Qubit> {
        let count = count as usize;
        let reused = count.min(self.available_ancilla.len());
        let mut borrowed: Vec<Qubit> = self
            .available_ancilla
            .drain(..reused)
            .map(|id| self.qubits[id.index()])
            .collect();
        if reused < count {
            let fresh = self.allocate((count - reused) as u32);
            self.ancilla.extend(fresh.iter().map(|q| q.id));
            borrowed.extend(fresh);
        }
        trace!(circuit = %self.id, count, reused, "borrowed ancilla");
        borrowed
    }

    /// Return ancilla qubits to the pool.
    ///
    /// The caller must have restored every qubit to |0⟩ and should return
    /// them in the reverse of the order they were borrowed. Neither is
    /// checked. Each returned qubit is pushed onto the front of the pool in
    /// turn, so the last one returned is the first one borrowed again.
    pub fn return_ancilla(&mut self, bits: &[Qubit]) -> IrResult<()> {
        self.check_owned(bits, None)?;
        if let Some(bit) = bits.iter().find(|b| !self.ancilla.contains(&b.id)) {
            return Err(IrError::NotAncilla(bit.id));
        }
        let mut pool: Vec<QubitId> = bits.iter().rev().map(|b| b.id).collect();
        pool.append(&mut self.available_ancilla);
        self.available_ancilla = pool;
        trace!(circuit = %self.id, count = bits.len(), "returned ancilla");
        Ok(())
    }

    /// Verify that every qubit was allocated by this circuit.
    pub(crate) fn check_owned(&self, bits: &[Qubit], gate_name: Option<&str>) -> IrResult<()> {
        for bit in bits {
            if bit.circuit != self.id || bit.index() >= self.qubits.len() {
                return Err(IrError::ForeignQubit {
                    qubit: bit.id,
                    owner: bit.circuit,
                    circuit: self.id,
                    gate_name: gate_name.map(String::from),
                });
            }
        }
        Ok(())
    }

    /// Record one application of `gate` to `bits`.
    pub fn apply_gate(&mut self, gate: &FixedGate, bits: &[Qubit]) -> IrResult<()> {
        if bits.len() != gate.size() as usize {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.size(),
                got: bits.len() as u32,
            });
        }
        self.check_owned(bits, Some(gate.name()))?;
        for (i, bit) in bits.iter().enumerate() {
            if bits[..i].iter().any(|b| b.id == bit.id) {
                return Err(IrError::DuplicateQubit {
                    qubit: bit.id,
                    gate_name: Some(gate.name().to_string()),
                });
            }
        }
        self.history.push(gate.instance(bits.iter().map(|b| b.id)));
        Ok(())
    }

    /// Count history entries produced by the gate called `name`.
    pub fn count_gate(&self, name: &str) -> usize {
        self.history.iter().filter(|g| g.instance_of(name)).count()
    }

    /// Count history entries flagged as measurements.
    pub fn count_measurements(&self) -> usize {
        self.history.iter().filter(|g| g.is_measure()).count()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit's handle.
    pub fn id(&self) -> CircuitId {
        self.id
    }

    /// Get the circuit's settings.
    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubit at `index`.
    pub fn qubit(&self, index: usize) -> Option<Qubit> {
        self.qubits.get(index).copied()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the recorded gate applications.
    pub fn history(&self) -> &[GateInstance] {
        &self.history
    }

    /// Get all registers.
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Find a register by name.
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.registers.iter().find(|r| r.name == name)
    }

    /// Every qubit ever allocated as an ancilla.
    pub fn ancilla(&self) -> &[QubitId] {
        &self.ancilla
    }

    /// Ancilla qubits currently available for borrowing.
    pub fn available_ancilla(&self) -> &[QubitId] {
        &self.available_ancilla
    }

    // =========================================================================
    // Text dump
    // =========================================================================

    /// Write the history, one instance per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for inst in &self.history {
            writeln!(writer, "{inst}")?;
        }
        writer.flush()
    }

    /// Write the history to the file at `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit with a trailing measurement of both qubits.
    pub fn bell() -> IrResult<Self> {
        Self::ghz(2)
    }

    /// Create a GHZ state circuit with a trailing measurement of every qubit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size(n);
        let qubits = circuit.qubits().to_vec();
        if let Some(first) = qubits.first() {
            catalog::H.apply(&mut circuit, std::slice::from_ref(first))?;
        }
        for pair in qubits.windows(2) {
            catalog::CX.apply(&mut circuit, pair)?;
        }
        catalog::M.apply(&mut circuit, &qubits)?;
        Ok(circuit)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.history {
            writeln!(f, "{inst}")?;
        }
        Ok(())
    }
}
