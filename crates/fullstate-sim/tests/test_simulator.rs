//! End-to-end simulation tests.

use fullstate_ir::catalog::{CCX, CRZ, CX, H, M, RY, SWAP, X};
use fullstate_ir::{Circuit, FixedGate, GateFlags, QubitId};
use fullstate_sim::{OperatorTable, SimConfig, SimError, SimOptions, Simulator, operators};
use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Basic probabilities
// ---------------------------------------------------------------------------

#[test]
fn x_then_cx_sets_both_qubits() {
    let mut circuit = Circuit::with_size(2);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q[..1]).unwrap();
    CX.apply(&mut circuit, &q).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs.len(), 1);
    assert_eq!(probs[&vec![1, 1]], 1.0);
}

#[test]
fn hadamard_splits_evenly() {
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    H.apply(&mut circuit, &q).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs[&vec![0]], 0.5);
    assert_eq!(probs[&vec![1]], 0.5);
}

#[test]
fn empty_circuit_is_ground_state() {
    let circuit = Circuit::with_size(3);
    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs.len(), 1);
    assert_eq!(probs[&vec![0, 0, 0]], 1.0);
}

#[test]
fn control_order_follows_application() {
    // CX(1, 0): qubit 1 controls qubit 0.
    let mut circuit = Circuit::with_size(2);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q[1..]).unwrap();
    CX.apply(&mut circuit, &[q[1], q[0]]).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs[&vec![1, 1]], 1.0);
}

#[test]
fn toffoli_on_non_adjacent_qubits() {
    let mut circuit = Circuit::with_size(4);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &[q[0], q[3]]).unwrap();
    CCX.apply(&mut circuit, &[q[3], q[0], q[1]]).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs[&vec![1, 1, 0, 1]], 1.0);
}

#[test]
fn swap_exchanges_qubits() {
    let mut circuit = Circuit::with_size(3);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q[..1]).unwrap();
    SWAP.apply(&mut circuit, &[q[0], q[2]]).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs[&vec![0, 0, 1]], 1.0);
}

#[test]
fn ry_rotation_amplitudes() {
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    RY.bind(&[PI / 2.0]).unwrap().apply(&mut circuit, &q).unwrap();

    let result = Simulator::new().simulate(&circuit).unwrap();
    assert!((result.probability_of_state(0) - 0.5).abs() < 1e-12);
    assert!((result.prob_of_measure_bit(QubitId(0), 1).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn controlled_phase_is_invisible_in_probabilities() {
    let mut circuit = Circuit::with_size(2);
    let q = circuit.qubits().to_vec();
    H.apply(&mut circuit, &q).unwrap();
    CRZ.bind(&[PI / 3.0]).unwrap().apply(&mut circuit, &q).unwrap();

    let probs = Simulator::new().simulate(&circuit).unwrap().register_probs();
    assert_eq!(probs.len(), 4);
    for p in probs.values() {
        assert_eq!(*p, 0.25);
    }
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

fn measured_ghz3() -> Circuit {
    let mut circuit = Circuit::with_size(3);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q[..1]).unwrap();
    M.apply(&mut circuit, &[q[2], q[1], q[0]]).unwrap();
    circuit
}

#[test]
fn trailing_block_sets_measure_order() {
    let circuit = measured_ghz3();
    let result = Simulator::new().simulate(&circuit).unwrap();
    assert_eq!(
        result.measure_order(),
        Some(&[QubitId(2), QubitId(1), QubitId(0)][..])
    );
    // Labels follow the measurement order: qubit 0 is read last.
    let probs = result.register_probs();
    assert_eq!(probs[&vec![0, 0, 1]], 1.0);
}

#[test]
fn gate_after_measurement_is_rejected() {
    let mut circuit = measured_ghz3();
    let q = circuit.qubits().to_vec();
    H.apply(&mut circuit, &q[..1]).unwrap();
    assert!(matches!(
        Simulator::new().simulate(&circuit),
        Err(SimError::UnsupportedMeasurement(_))
    ));
}

#[test]
fn duplicate_measurement_is_rejected() {
    let mut circuit = measured_ghz3();
    let q = circuit.qubits().to_vec();
    M.apply(&mut circuit, &q[..1]).unwrap();
    assert!(matches!(
        Simulator::new().simulate(&circuit),
        Err(SimError::UnsupportedMeasurement(_))
    ));
}

#[test]
fn ignored_measurements_are_skipped() {
    let mut circuit = measured_ghz3();
    let q = circuit.qubits().to_vec();
    H.apply(&mut circuit, &q[..1]).unwrap();

    let options = SimOptions::default().ignoring_measurements();
    let result = Simulator::new().simulate_with(&circuit, &options).unwrap();
    assert!(result.measure_order().is_none());
    let probs = result.register_probs();
    assert_eq!(probs[&vec![0, 0, 0]], 0.5);
    assert_eq!(probs[&vec![1, 0, 0]], 0.5);
}

#[test]
fn collapse_with_seed_is_reproducible() {
    let circuit = Circuit::ghz(3).unwrap();
    let sim = Simulator::with_config(SimConfig::default().with_seed(17));
    let options = SimOptions::default().collapsing();

    let first = sim.simulate_with(&circuit, &options).unwrap();
    let second = sim.simulate_with(&circuit, &options).unwrap();
    assert_eq!(first.previous_measurements(), second.previous_measurements());

    let outcome = first.previous_measurements().to_vec();
    assert_eq!(outcome.len(), 3);
    assert!(outcome.iter().all(|&b| b == outcome[0]));
    // The first draw decides the GHZ outcome; the rest are certain.
    assert!((first.prob_of_previous_measurements() - 0.5).abs() < 1e-12);

    let probs = first.register_probs();
    assert_eq!(probs.len(), 1);
    assert_eq!(probs[&outcome], 1.0);
}

#[test]
fn collapsed_state_stays_unnormalized() {
    let circuit = Circuit::bell().unwrap();
    let sim = Simulator::with_config(SimConfig::default().with_seed(3));
    let result = sim
        .simulate_with(&circuit, &SimOptions::default().collapsing())
        .unwrap();
    let weight: f64 = result.state_vector().iter().map(|a| a.norm_sqr()).sum();
    assert!((weight - 0.5).abs() < 1e-12);
    let bit = result.previous_measurements()[0];
    assert_eq!(result.prob_of_measure_bit(QubitId(1), bit).unwrap(), 1.0);
}

// ---------------------------------------------------------------------------
// Incremental simulation
// ---------------------------------------------------------------------------

#[test]
fn continue_pads_new_qubits() {
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q).unwrap();

    let sim = Simulator::new();
    let mut result = sim.simulate(&circuit).unwrap();
    let done = circuit.history().len();

    let extra = circuit.new_register(1, None).unwrap();
    CX.apply(&mut circuit, &[q[0], extra[0]]).unwrap();

    let options = SimOptions::default().with_range(done..circuit.history().len());
    sim.continue_simulation(&circuit, &mut result, &options).unwrap();

    assert_eq!(result.num_qubits(), 2);
    assert_eq!(result.register_probs()[&vec![1, 1]], 1.0);
}

#[test]
fn continue_with_ancilla() {
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    H.apply(&mut circuit, &q).unwrap();
    let anc = circuit.borrow_ancilla(1);
    CX.apply(&mut circuit, &[q[0], anc[0]]).unwrap();
    CX.apply(&mut circuit, &[q[0], anc[0]]).unwrap();
    circuit.return_ancilla(&anc).unwrap();

    let result = Simulator::new().simulate(&circuit).unwrap();
    assert!((result.prob_of_measure_bit(anc[0].id, 0).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn ignoring_replay_clears_measure_order() {
    let mut circuit = Circuit::with_size(2);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q[..1]).unwrap();
    M.apply(&mut circuit, &[q[1], q[0]]).unwrap();

    let sim = Simulator::new();
    let mut result = sim.simulate(&circuit).unwrap();
    assert_eq!(result.measure_order(), Some(&[QubitId(1), QubitId(0)][..]));
    assert_eq!(result.register_probs()[&vec![0, 1]], 1.0);

    let done = circuit.history().len();
    H.apply(&mut circuit, &q[1..]).unwrap();
    let options = SimOptions::default()
        .ignoring_measurements()
        .with_range(done..circuit.history().len());
    sim.continue_simulation(&circuit, &mut result, &options).unwrap();

    assert!(result.measure_order().is_none());
    let probs = result.register_probs();
    assert_eq!(probs.len(), 2);
    assert_eq!(probs[&vec![1, 0]], 0.5);
    assert_eq!(probs[&vec![1, 1]], 0.5);
}

#[test]
fn continue_with_unmeasured_circuit_clears_measure_order() {
    let measured = measured_ghz3();
    let sim = Simulator::new();
    let mut result = sim.simulate(&measured).unwrap();
    assert!(result.measure_order().is_some());

    let mut plain = Circuit::with_size(3);
    let q = plain.qubits().to_vec();
    X.apply(&mut plain, &q[1..2]).unwrap();
    sim.continue_simulation(&plain, &mut result, &SimOptions::default())
        .unwrap();

    assert!(result.measure_order().is_none());
    assert_eq!(result.register_probs()[&vec![1, 1, 0]], 1.0);
}

#[test]
fn continue_on_measured_result_keeps_block() {
    let circuit = measured_ghz3();
    let sim = Simulator::new();
    let mut result = sim.simulate(&circuit).unwrap();

    let options = SimOptions::default().with_range(0..0);
    sim.continue_simulation(&circuit, &mut result, &options).unwrap();

    assert_eq!(
        result.measure_order(),
        Some(&[QubitId(2), QubitId(1), QubitId(0)][..])
    );
    assert_eq!(result.register_probs()[&vec![0, 0, 1]], 1.0);
}

#[test]
fn collapse_after_ignoring_replay_samples_nothing() {
    let circuit = Circuit::bell().unwrap();
    let sim = Simulator::with_config(SimConfig::default().with_seed(5));
    let options = SimOptions::default().ignoring_measurements().collapsing();
    let result = sim.simulate_with(&circuit, &options).unwrap();
    assert!(result.previous_measurements().is_empty());
    assert_eq!(result.register_probs().len(), 2);
}

#[test]
fn custom_measurement_gate_is_validated() {
    let meas = FixedGate::new("Meas", 1, GateFlags::MEASUREMENT);
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    X.apply(&mut circuit, &q).unwrap();
    meas.apply(&mut circuit, &q).unwrap();

    let result = Simulator::new().simulate(&circuit).unwrap();
    assert_eq!(result.measure_order(), Some(&[QubitId(0)][..]));
    assert_eq!(result.register_probs()[&vec![1]], 1.0);

    meas.apply(&mut circuit, &q).unwrap();
    assert!(matches!(
        Simulator::new().simulate(&circuit),
        Err(SimError::UnsupportedMeasurement(_))
    ));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unsupported_gate_names_gate_and_args() {
    let mut circuit = Circuit::with_size(1);
    let q = circuit.qubits().to_vec();
    RY.bind(&[0.25]).unwrap().apply(&mut circuit, &q).unwrap();

    let mut table = OperatorTable::empty();
    table.insert_fixed("X", operators::pauli_x());
    let err = Simulator::new().with_table(table).simulate(&circuit).unwrap_err();
    assert!(matches!(
        err,
        SimError::UnsupportedGate { ref name, ref args } if name == "Ry" && args == &[0.25]
    ));
}

#[test]
fn qubit_count_limit_is_configurable() {
    let circuit = Circuit::ghz(5).unwrap();
    let sim = Simulator::with_config(SimConfig::default().with_max_qubits(4));
    assert!(matches!(
        sim.simulate(&circuit),
        Err(SimError::TooManyQubits { num_qubits: 5, max: 4 })
    ));
}
