//! The replay engine.

use std::ops::Range;
use std::time::Instant;

use fullstate_ir::{Circuit, GateInstance, QubitId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, trace};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::operators::OperatorTable;
use crate::result::SimulationResult;

/// Per-call replay options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimOptions {
    /// Slice of the history to replay; the whole history when absent.
    /// Clamped to the history length.
    pub range: Option<Range<usize>>,
    /// Skip measurement gates instead of validating them.
    pub ignore_measurements: bool,
    /// Sample every qubit of the measurement block after replay.
    pub collapse: bool,
}

impl SimOptions {
    /// Replay only `range` of the history.
    #[must_use]
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Skip measurement gates.
    #[must_use]
    pub fn ignoring_measurements(mut self) -> Self {
        self.ignore_measurements = true;
        self
    }

    /// Collapse the measured qubits after replay.
    #[must_use]
    pub fn collapsing(mut self) -> Self {
        self.collapse = true;
        self
    }
}

/// Dense state-vector simulator.
#[derive(Debug, Clone)]
pub struct Simulator {
    table: OperatorTable,
    config: SimConfig,
}

impl Simulator {
    /// Create a simulator over the standard operator table.
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// Create a simulator with custom settings.
    pub fn with_config(config: SimConfig) -> Self {
        Self {
            table: OperatorTable::standard(),
            config,
        }
    }

    /// Replace the operator table.
    #[must_use]
    pub fn with_table(mut self, table: OperatorTable) -> Self {
        self.table = table;
        self
    }

    /// Simulator settings.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Operator table in use.
    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// Replay the whole history from `|0…0⟩`.
    pub fn simulate(&self, circuit: &Circuit) -> SimResult<SimulationResult> {
        self.simulate_with(circuit, &SimOptions::default())
    }

    /// Replay from `|0…0⟩` with explicit options.
    pub fn simulate_with(
        &self,
        circuit: &Circuit,
        options: &SimOptions,
    ) -> SimResult<SimulationResult> {
        let mut result = SimulationResult::new(self.config.clone());
        self.continue_simulation(circuit, &mut result, options)?;
        Ok(result)
    }

    /// Extend an existing result with (part of) a circuit's history.
    ///
    /// When the circuit has grown since `result` was produced, the state is
    /// zero-padded to the new width first.
    #[instrument(skip(self, circuit, result), fields(circuit = %circuit.id()))]
    pub fn continue_simulation(
        &self,
        circuit: &Circuit,
        result: &mut SimulationResult,
        options: &SimOptions,
    ) -> SimResult<()> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.config.max_qubits {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max: self.config.max_qubits,
            });
        }
        result.pad_to(num_qubits);

        let history = circuit.history();
        let has_measurements = history.iter().any(GateInstance::is_measure);
        let order = if options.ignore_measurements || !has_measurements {
            None
        } else {
            let order = measurement_order(history, num_qubits)?;
            debug!("Measurement block covers {} qubits", order.len());
            Some(order)
        };
        result.set_measure_order(order);

        let range = options.range.clone().unwrap_or(0..history.len());
        let end = range.end.min(history.len());
        let begin = range.start.min(end);
        debug!(
            "Simulating {} of {} instructions on {} qubits",
            end - begin,
            history.len(),
            num_qubits
        );

        for instance in &history[begin..end] {
            if instance.measurement {
                continue;
            }
            self.apply_instance(instance, result)?;
        }

        if options.collapse {
            self.collapse(result)?;
        }

        debug!("Simulation completed in {:?}", start.elapsed());
        Ok(())
    }

    fn apply_instance(&self, instance: &GateInstance, result: &mut SimulationResult) -> SimResult<()> {
        let op = self.table.resolve(&instance.name, &instance.args)?;
        let num_bits = instance.bits.len();
        if op.nrows() != 1 << num_bits || op.ncols() != op.nrows() {
            return Err(SimError::OperatorShape {
                name: instance.name.to_string(),
                got: op.nrows(),
                num_bits,
            });
        }
        let num_qubits = result.num_qubits();
        let bits = instance
            .bits
            .iter()
            .map(|q| {
                let index = q.index();
                if index < num_qubits {
                    Ok(index)
                } else {
                    Err(SimError::QubitOutOfRange {
                        qubit: index,
                        num_qubits,
                    })
                }
            })
            .collect::<SimResult<Vec<usize>>>()?;
        trace!("Applying {}", instance);
        result.apply_operator(&op, &bits);
        Ok(())
    }

    fn collapse(&self, result: &mut SimulationResult) -> SimResult<()> {
        let Some(order) = result.measure_order().map(<[QubitId]>::to_vec) else {
            return Ok(());
        };
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for qubit in order {
            result.measure_bit(qubit, &mut rng)?;
        }
        debug!(
            "Collapsed to {:?} with probability {:.5}",
            result.previous_measurements(),
            result.prob_of_previous_measurements()
        );
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the trailing measurement block and return its qubit order.
///
/// The last `n` instances must each measure a distinct in-range qubit and no
/// measurement may appear anywhere else.
fn measurement_order(history: &[GateInstance], num_qubits: usize) -> SimResult<Vec<QubitId>> {
    let total = history.iter().filter(|g| g.is_measure()).count();
    if history.len() < num_qubits {
        return Err(SimError::UnsupportedMeasurement(format!(
            "history has {} instructions, fewer than the {} qubits to measure",
            history.len(),
            num_qubits
        )));
    }
    if total != num_qubits {
        return Err(SimError::UnsupportedMeasurement(format!(
            "found {total} measurements, expected exactly one per qubit ({num_qubits})"
        )));
    }

    let tail = &history[history.len() - num_qubits..];
    let mut seen = vec![false; num_qubits];
    let mut order = Vec::with_capacity(num_qubits);
    for instance in tail {
        if !instance.is_measure() {
            return Err(SimError::UnsupportedMeasurement(format!(
                "'{instance}' follows a measurement"
            )));
        }
        let qubit = instance.bits.first().copied().ok_or_else(|| {
            SimError::UnsupportedMeasurement("measurement without a qubit".into())
        })?;
        let index = qubit.index();
        if index >= num_qubits || seen[index] {
            return Err(SimError::UnsupportedMeasurement(format!(
                "qubit {qubit} is measured twice or out of range"
            )));
        }
        seen[index] = true;
        order.push(qubit);
    }
    Ok(order)
}
