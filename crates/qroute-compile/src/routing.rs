//! Routing for two-qubit gates on the grid.

use tracing::debug;

use qroute_ir::{BinaryOp, Circuit, Instruction};

use crate::error::{CompileError, CompileResult};
use crate::geometry::Coordinate;
use crate::placement::PlacementMap;

/// Greedy nearest-neighbor router.
///
/// The control qubit is swapped one cell at a time toward the target until
/// the two are adjacent. Each step moves along the axis with the larger
/// remaining offset (x on a tie), so every SWAP shortens the distance by
/// exactly one and the router never backtracks. The result is fast and
/// deterministic, not minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyRouter;

impl GreedyRouter {
    /// Route one two-qubit gate.
    ///
    /// Appends the SWAPs, then the gate itself over the now-adjacent
    /// coordinates, to `output`, and updates `placement` to match. Returns
    /// the number of SWAPs inserted.
    ///
    /// If a step lands on a cell with no qubit (possible when the qubit count
    /// is not a perfect square) routing stops with an internal consistency
    /// violation; `output` and `placement` may then hold the SWAPs already
    /// made.
    pub fn route(
        &self,
        gate: &BinaryOp,
        placement: &mut PlacementMap,
        output: &mut Circuit<Coordinate>,
    ) -> CompileResult<usize> {
        if gate.control == gate.target {
            return Err(CompileError::IdenticalOperands {
                gate: gate.gate.clone(),
                qubit: gate.control.clone(),
            });
        }

        let mut control = placement.get_coordinate(&gate.control)?;
        let target = placement.get_coordinate(&gate.target)?;
        let mut swaps = 0;

        while !control.adjacent(&target) {
            let neighbor = step_towards(control, target);
            let occupant = placement.get_qubit_at(&neighbor)?.clone();

            placement.swap(&gate.control, &occupant)?;
            output.push(Instruction::swap(control, neighbor));
            debug!(
                "SWAP {control},{neighbor}: '{}' toward '{}', displacing '{occupant}'",
                gate.control,
                gate.target
            );

            control = neighbor;
            swaps += 1;
        }

        output.push(Instruction::Binary(BinaryOp {
            gate: gate.gate.clone(),
            control,
            target,
        }));
        Ok(swaps)
    }
}

/// The cell one step from `from` toward `to`.
///
/// Steps along the axis with the larger absolute offset; a tie goes to x.
/// `from` and `to` must differ.
fn step_towards(from: Coordinate, to: Coordinate) -> Coordinate {
    let dx = i64::from(from.x) - i64::from(to.x);
    let dy = i64::from(from.y) - i64::from(to.y);

    if dx.abs() >= dy.abs() {
        let x = if dx > 0 { from.x - 1 } else { from.x + 1 };
        Coordinate::new(x, from.y)
    } else {
        let y = if dy > 0 { from.y - 1 } else { from.y + 1 };
        Coordinate::new(from.x, y)
    }
}
