//! Reading circuits back from their text dump.
//!
//! Each line holds one gate instance, `name(b0, b1, ...)` or
//! `name_a0,a1(b0, ...)` when the gate carries parameters. Blank lines and
//! lines starting with `#` are skipped.

use crate::catalog;
use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::FixedGate;

/// Widest circuit a dump may describe.
pub const MAX_DUMP_QUBITS: u32 = 64;

/// One parsed line: a bound gate and the qubit indices it acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpLine {
    /// Gate with its parameters bound.
    pub gate: FixedGate,
    /// Qubit indices in application order.
    pub bits: Vec<u32>,
}

/// Parse a single non-empty line.
pub fn parse_line(text: &str, line: usize) -> IrResult<DumpLine> {
    let err = |message: String| IrError::Parse { line, message };

    let open = text
        .find('(')
        .ok_or_else(|| err(format!("missing '(' in '{text}'")))?;
    let inner = text[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| err(format!("missing closing ')' in '{text}'")))?;
    let head = &text[..open];

    let (name, args) = match head.split_once('_') {
        Some((name, args)) => {
            let args = args
                .split(',')
                .map(|a| {
                    a.trim()
                        .parse::<f64>()
                        .map_err(|e| err(format!("bad argument '{a}': {e}")))
                })
                .collect::<IrResult<Vec<f64>>>()?;
            (name, args)
        }
        None => (head, vec![]),
    };

    let kind = catalog::lookup(name.trim()).ok_or_else(|| IrError::UnknownGate(name.to_string()))?;
    let gate = kind.bind(&args)?;

    let bits = inner
        .split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(|b| {
            let index = b
                .parse::<u32>()
                .map_err(|e| err(format!("bad qubit index '{b}': {e}")))?;
            if index >= MAX_DUMP_QUBITS {
                return Err(err(format!(
                    "qubit index {index} exceeds the limit of {MAX_DUMP_QUBITS} qubits"
                )));
            }
            Ok(index)
        })
        .collect::<IrResult<Vec<u32>>>()?;

    Ok(DumpLine { gate, bits })
}

/// Build a fresh circuit from a text dump.
///
/// The circuit gets one register wide enough for the highest qubit index
/// mentioned. Indices at or above [`MAX_DUMP_QUBITS`] are rejected before
/// anything is allocated.
pub fn parse(text: &str) -> IrResult<Circuit> {
    let mut lines = vec![];
    for (i, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(parse_line(trimmed, i + 1)?);
    }

    let width = lines
        .iter()
        .flat_map(|l| l.bits.iter())
        .map(|&b| b + 1)
        .max()
        .unwrap_or(0);
    let mut circuit = Circuit::with_size(width);
    let qubits = circuit.qubits().to_vec();

    for l in &lines {
        let bits: Vec<_> = l.bits.iter().map(|&b| qubits[b as usize]).collect();
        circuit.apply_gate(&l.gate, &bits)?;
    }
    Ok(circuit)
}
