//! Initial placement strategies.
//!
//! A strategy assigns each logical qubit, in order of first appearance in the
//! circuit, to a cell of the smallest square grid that holds them all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use qroute_ir::QubitName;

use crate::error::{CompileError, CompileResult};
use crate::geometry::{Coordinate, Grid};
use crate::placement::PlacementMap;

/// How logical qubits are laid out on the grid before routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// Fill rows left to right, top to bottom.
    ///
    /// ```text
    /// a b c
    /// d e f
    /// g h i
    /// ```
    #[default]
    RowMajor,

    /// Placement derived from the circuit's interaction graph.
    ///
    /// Not implemented: selecting it always fails with
    /// [`CompileError::UnimplementedStrategy`].
    GraphBased,

    /// Fill even rows left to right and odd rows right to left.
    ///
    /// Consecutive qubits stay neighbors across row ends, which suits
    /// circuits whose interactions form a chain (e.g. Ising models).
    ///
    /// ```text
    /// a b c
    /// f e d
    /// g h i
    /// ```
    Boustrophedon,
}

impl PlacementStrategy {
    /// All strategies, in the order they are listed to users.
    pub const ALL: [PlacementStrategy; 3] = [
        PlacementStrategy::RowMajor,
        PlacementStrategy::GraphBased,
        PlacementStrategy::Boustrophedon,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PlacementStrategy::RowMajor => "row-major",
            PlacementStrategy::GraphBased => "graph-based",
            PlacementStrategy::Boustrophedon => "boustrophedon",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            PlacementStrategy::RowMajor => "fill rows left to right, top to bottom",
            PlacementStrategy::GraphBased => "interaction-graph placement (not implemented)",
            PlacementStrategy::Boustrophedon => "snake through rows, alternating direction",
        }
    }

    /// Check if selecting this strategy can succeed.
    pub fn is_implemented(self) -> bool {
        !matches!(self, PlacementStrategy::GraphBased)
    }

    /// Build the initial placement for `qubits` on the smallest grid that
    /// holds them.
    ///
    /// `qubits` must be deduplicated; a repeated name is reported as an
    /// internal consistency violation.
    pub fn place<'a>(
        self,
        qubits: impl IntoIterator<Item = &'a QubitName>,
    ) -> CompileResult<PlacementMap> {
        let qubits: Vec<&QubitName> = qubits.into_iter().collect();
        let grid = Grid::for_qubits(qubits.len())?;
        self.place_on(grid, qubits)
    }

    /// Build the initial placement for `qubits` on a given grid.
    ///
    /// Fails with [`CompileError::GridTooLarge`] if the grid has fewer cells
    /// than there are qubits.
    pub fn place_on<'a>(
        self,
        grid: Grid,
        qubits: impl IntoIterator<Item = &'a QubitName>,
    ) -> CompileResult<PlacementMap> {
        let fill: fn(usize, u32) -> Coordinate = match self {
            PlacementStrategy::RowMajor => row_major_cell,
            PlacementStrategy::Boustrophedon => boustrophedon_cell,
            PlacementStrategy::GraphBased => {
                return Err(CompileError::UnimplementedStrategy(self));
            }
        };

        let qubits: Vec<&QubitName> = qubits.into_iter().collect();
        if qubits.len() > grid.num_cells() {
            return Err(CompileError::GridTooLarge {
                qubits: qubits.len(),
            });
        }
        debug!(
            "Placing {} qubits on a {}x{} grid ({})",
            qubits.len(),
            grid.dimension(),
            grid.dimension(),
            self
        );

        let mut placement = PlacementMap::new();
        for (index, qubit) in qubits.into_iter().enumerate() {
            placement.place(qubit.clone(), fill(index, grid.dimension()))?;
        }
        Ok(placement)
    }
}

/// Cell of the `index`-th qubit in row-major order.
#[allow(clippy::cast_possible_truncation)]
fn row_major_cell(index: usize, dimension: u32) -> Coordinate {
    let dim = dimension as usize;
    Coordinate::new((index % dim) as u32, (index / dim) as u32)
}

/// Cell of the `index`-th qubit in boustrophedon order.
#[allow(clippy::cast_possible_truncation)]
fn boustrophedon_cell(index: usize, dimension: u32) -> Coordinate {
    let dim = dimension as usize;
    let (row, column) = (index / dim, index % dim);
    let x = if row % 2 == 0 { column } else { dim - 1 - column };
    Coordinate::new(x as u32, row as u32)
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown placement strategy: '{0}'. Available: row-major, graph-based, boustrophedon")]
pub struct UnknownStrategy(pub String);

impl FromStr for PlacementStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "row-major" | "rowmajor" | "row" | "naive" => Ok(PlacementStrategy::RowMajor),
            "graph-based" | "graph" | "graph-mapper" => Ok(PlacementStrategy::GraphBased),
            "boustrophedon" | "alternating" | "alternating-row-major" | "snake" => {
                Ok(PlacementStrategy::Boustrophedon)
            }
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
