//! Benchmarks for state-vector simulation
//!
//! Run with: cargo bench -p fullstate-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fullstate_ir::Circuit;
use fullstate_ir::catalog::{CX, H, RZ};
use fullstate_sim::operators::hadamard;
use fullstate_sim::permutation::{QubitPermutation, apply_block_diagonal};
use fullstate_sim::state::zero_state;
use fullstate_sim::{SimOptions, Simulator};

/// Layers of H, Rz and a CX ladder.
fn layered_circuit(num_qubits: u32, depth: usize) -> Circuit {
    let mut circuit = Circuit::with_size(num_qubits);
    let q = circuit.qubits().to_vec();
    for layer in 0..depth {
        H.apply(&mut circuit, &q).unwrap();
        RZ.bind(&[0.1 * layer as f64]).unwrap().apply(&mut circuit, &q).unwrap();
        for pair in q.windows(2) {
            CX.apply(&mut circuit, pair).unwrap();
        }
    }
    circuit
}

/// Benchmark whole-circuit simulation
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let sim = Simulator::new();

    for num_qubits in &[4_u32, 8, 12] {
        let circuit = layered_circuit(*num_qubits, 4);
        group.bench_with_input(
            BenchmarkId::new("layered", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| sim.simulate(black_box(circuit)).unwrap());
            },
        );
    }

    let ghz = Circuit::ghz(10).unwrap();
    group.bench_function("ghz_10_collapse", |b| {
        let options = SimOptions::default().collapsing();
        b.iter(|| sim.simulate_with(black_box(&ghz), &options).unwrap());
    });

    group.finish();
}

/// Benchmark the permute/apply/unpermute step on its own
fn bench_gate_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_step");
    let op = hadamard();

    for num_qubits in &[8_usize, 12, 16] {
        let psi = zero_state(*num_qubits);
        let perm = QubitPermutation::targets_low(&[0], *num_qubits);
        group.bench_with_input(
            BenchmarkId::new("h_on_msb", num_qubits),
            &psi,
            |b, psi| {
                b.iter(|| {
                    let mut permuted = perm.apply(black_box(psi));
                    apply_block_diagonal(&op, &mut permuted);
                    perm.apply_inverse(&permuted)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simulate, bench_gate_step);
criterion_main!(benches);
