//! Logical-to-physical circuit transformation.

use serde::Serialize;
use tracing::{debug, info, instrument};

use qroute_ir::{Circuit, Instruction};

use crate::error::CompileResult;
use crate::geometry::{Coordinate, Grid};
use crate::layout::PlacementStrategy;
use crate::placement::{PlacementMap, QubitPlacement};
use crate::routing::GreedyRouter;

/// Rewrites circuits over logical qubits into circuits over grid
/// coordinates in which every two-qubit gate acts on neighbors.
#[derive(Debug, Clone, Default)]
pub struct CircuitTransformer {
    /// Initial placement strategy.
    strategy: PlacementStrategy,
    /// Router for two-qubit gates.
    router: GreedyRouter,
}

/// Result of a successful transformation.
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The physical circuit.
    pub circuit: Circuit<Coordinate>,
    /// Summary of what was done.
    pub report: TransformReport,
}

/// Summary of a transformation, for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub strategy: PlacementStrategy,
    pub grid_dimension: u32,
    pub qubit_count: usize,
    pub input_instructions: usize,
    pub output_instructions: usize,
    pub swap_count: usize,
    /// Placement before the first instruction, in reading order.
    pub initial_placement: Vec<QubitPlacement>,
    /// Placement after the last instruction, in reading order.
    pub final_placement: Vec<QubitPlacement>,
}

impl CircuitTransformer {
    /// Create a transformer with the given placement strategy.
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self {
            strategy,
            router: GreedyRouter,
        }
    }

    /// Set the placement strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get the placement strategy.
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    /// Transform a circuit.
    ///
    /// Qubits are placed in order of first appearance. Instructions are then
    /// rewritten in order: classical bit declarations are copied, unary
    /// operations are renamed to their qubit's coordinate, and two-qubit
    /// operations are routed, with any SWAPs emitted right before the gate
    /// that needed them. The first error aborts the whole transformation.
    #[instrument(skip(self, circuit), fields(strategy = %self.strategy))]
    pub fn transform(&self, circuit: &Circuit) -> CompileResult<Transformed> {
        let qubits = circuit.qubits();
        info!(
            "Transforming circuit with {} instructions over {} qubits",
            circuit.len(),
            qubits.len()
        );

        let grid = Grid::for_qubits(qubits.len())?;
        let mut placement = self.strategy.place_on(grid, qubits.iter().copied())?;
        let initial_placement = placement.sorted_entries();

        let mut output = Circuit::with_capacity(circuit.len());
        let mut swap_count = 0;
        for instruction in circuit {
            swap_count += self.rewrite(instruction, &mut placement, &mut output)?;
        }
        debug_assert!(placement.is_consistent());

        info!(
            "Transformation completed: {} instructions, {} SWAPs inserted",
            output.len(),
            swap_count
        );

        let report = TransformReport {
            strategy: self.strategy,
            grid_dimension: grid.dimension(),
            qubit_count: placement.len(),
            input_instructions: circuit.len(),
            output_instructions: output.len(),
            swap_count,
            initial_placement,
            final_placement: placement.sorted_entries(),
        };
        Ok(Transformed {
            circuit: output,
            report,
        })
    }

    /// Rewrite one instruction, returning the number of SWAPs it needed.
    fn rewrite(
        &self,
        instruction: &Instruction,
        placement: &mut PlacementMap,
        output: &mut Circuit<Coordinate>,
    ) -> CompileResult<usize> {
        match instruction {
            Instruction::Binary(op) => {
                let swaps = self.router.route(op, placement, output)?;
                if swaps > 0 {
                    debug!(
                        "{} {},{} needed {} SWAPs",
                        op.gate, op.control, op.target, swaps
                    );
                }
                Ok(swaps)
            }
            other => {
                let physical = other.try_map_qubits(|q| placement.get_coordinate(q))?;
                output.push(physical);
                Ok(0)
            }
        }
    }
}

/// Transform a circuit with the given strategy, discarding the report.
pub fn transform(
    circuit: &Circuit,
    strategy: PlacementStrategy,
) -> CompileResult<Circuit<Coordinate>> {
    CircuitTransformer::new(strategy)
        .transform(circuit)
        .map(|t| t.circuit)
}
