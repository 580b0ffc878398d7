//! The built-in gate catalog.
//!
//! | Gate | Qubits | Parameters |
//! |------|--------|------------|
//! | `M` | 1 | measurement |
//! | `I1`, `X`, `Y`, `Z`, `H`, `S`, `Sd`, `T`, `Td` | 1 | – |
//! | `Rx`, `Ry`, `Rz` | 1 | angle |
//! | `I2`, `SWAP`, `CX` (`CNOT`), `CY`, `CZ`, `CS`, `CSd`, `CT`, `CTd` | 2 | – |
//! | `CRz` | 2 | angle |
//! | `I3`, `CSWAP`, `CCX` (`TOFF`) | 3 | – |
//! | `CCRz` | 3 | angle |

use crate::gate::{FixedGate, GateFlags, GateKind, GenericGate};

/// Single-qubit measurement.
pub const M: FixedGate = FixedGate::new("M", 1, GateFlags::MEASUREMENT);

// Single-qubit gates
/// Hadamard gate.
pub const H: FixedGate = FixedGate::new("H", 1, GateFlags::DIVERGENT);
/// Identity gate.
pub const I1: FixedGate = FixedGate::new("I1", 1, GateFlags::NONE);
/// Pauli-X gate.
pub const X: FixedGate = FixedGate::new("X", 1, GateFlags::NONE);
/// Pauli-Y gate.
pub const Y: FixedGate = FixedGate::new("Y", 1, GateFlags::NONE);
/// Pauli-Z gate.
pub const Z: FixedGate = FixedGate::new("Z", 1, GateFlags::NONE);
/// S gate (sqrt(Z)).
pub const S: FixedGate = FixedGate::new("S", 1, GateFlags::NONE);
/// S-dagger gate.
pub const SD: FixedGate = FixedGate::new("Sd", 1, GateFlags::NONE);
/// T gate (fourth root of Z).
pub const T: FixedGate = FixedGate::new("T", 1, GateFlags::NONE);
/// T-dagger gate.
pub const TD: FixedGate = FixedGate::new("Td", 1, GateFlags::NONE);
/// Rotation around X.
pub const RX: GenericGate = GenericGate::new("Rx", 1, 1, GateFlags::NONE);
/// Rotation around Y.
pub const RY: GenericGate = GenericGate::new("Ry", 1, 1, GateFlags::NONE);
/// Phase rotation around Z.
pub const RZ: GenericGate = GenericGate::new("Rz", 1, 1, GateFlags::NONE);

// Two-qubit gates
/// Two-qubit identity.
pub const I2: FixedGate = FixedGate::new("I2", 2, GateFlags::NONE);
/// SWAP gate.
pub const SWAP: FixedGate = FixedGate::new("SWAP", 2, GateFlags::NONE);
/// Controlled-X gate.
pub const CX: FixedGate = FixedGate::new("CX", 2, GateFlags::NONE);
/// Alias of [`CX`].
pub const CNOT: FixedGate = CX;
/// Controlled-Y gate.
pub const CY: FixedGate = FixedGate::new("CY", 2, GateFlags::NONE);
/// Controlled-Z gate.
pub const CZ: FixedGate = FixedGate::new("CZ", 2, GateFlags::NONE);
/// Controlled-S gate.
pub const CS: FixedGate = FixedGate::new("CS", 2, GateFlags::NONE);
/// Controlled-S-dagger gate.
pub const CSD: FixedGate = FixedGate::new("CSd", 2, GateFlags::NONE);
/// Controlled-T gate.
pub const CT: FixedGate = FixedGate::new("CT", 2, GateFlags::NONE);
/// Controlled-T-dagger gate.
pub const CTD: FixedGate = FixedGate::new("CTd", 2, GateFlags::NONE);
/// Controlled phase rotation.
pub const CRZ: GenericGate = GenericGate::new("CRz", 2, 1, GateFlags::NONE);

// Three-qubit gates
/// Three-qubit identity.
pub const I3: FixedGate = FixedGate::new("I3", 3, GateFlags::NONE);
/// Fredkin gate.
pub const CSWAP: FixedGate = FixedGate::new("CSWAP", 3, GateFlags::NONE);
/// Toffoli gate.
pub const CCX: FixedGate = FixedGate::new("CCX", 3, GateFlags::NONE);
/// Alias of [`CCX`].
pub const TOFF: FixedGate = CCX;
/// Doubly controlled phase rotation.
pub const CCRZ: GenericGate = GenericGate::new("CCRz", 3, 1, GateFlags::NONE);

/// Every gate kind in the catalog, aliases excluded.
pub fn all() -> Vec<GateKind> {
    vec![
        M.into(),
        I1.into(),
        X.into(),
        Y.into(),
        Z.into(),
        H.into(),
        S.into(),
        SD.into(),
        T.into(),
        TD.into(),
        RX.into(),
        RY.into(),
        RZ.into(),
        I2.into(),
        SWAP.into(),
        CX.into(),
        CY.into(),
        CZ.into(),
        CS.into(),
        CSD.into(),
        CT.into(),
        CTD.into(),
        CRZ.into(),
        I3.into(),
        CSWAP.into(),
        CCX.into(),
        CCRZ.into(),
    ]
}

/// Look up a gate kind by name. Aliases resolve to their canonical gate.
pub fn lookup(name: &str) -> Option<GateKind> {
    let canonical = match name {
        "CNOT" => "CX",
        "TOFF" => "CCX",
        other => other,
    };
    all().into_iter().find(|g| g.name() == canonical)
}
