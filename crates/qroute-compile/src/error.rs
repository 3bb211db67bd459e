//! Error types for the compilation crate.

use qroute_ir::QubitName;
use thiserror::Error;

use crate::geometry::Coordinate;
use crate::layout::PlacementStrategy;

/// A placement map operation that would break, or found broken, the
/// qubit/coordinate bijection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlacementError {
    /// Forward lookup of a qubit that was never placed.
    #[error("qubit '{0}' has no coordinate")]
    UnknownQubit(QubitName),

    /// Inverse lookup of a cell no qubit occupies.
    #[error("no qubit occupies ({}, {})", .0.x, .0.y)]
    VacantCoordinate(Coordinate),

    /// A qubit was placed twice.
    #[error("qubit '{0}' is already placed")]
    QubitAlreadyPlaced(QubitName),

    /// Two qubits were placed on the same cell.
    #[error("({}, {}) is already occupied by '{occupant}'", .coordinate.x, .coordinate.y)]
    CoordinateOccupied {
        coordinate: Coordinate,
        occupant: QubitName,
    },
}

/// Errors that can occur during compilation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompileError {
    /// The selected placement strategy has no implementation.
    #[error("Placement strategy '{0}' is not implemented")]
    UnimplementedStrategy(PlacementStrategy),

    /// The placement map disagrees with what routing expects.
    ///
    /// This points at a grid-sizing or routing bug, not at bad input.
    #[error("Internal consistency violation: {0}")]
    InternalConsistencyViolation(#[from] PlacementError),

    /// A two-qubit gate names the same qubit twice and cannot be routed.
    #[error("Gate '{gate}' uses qubit '{qubit}' as both operands")]
    IdenticalOperands { gate: String, qubit: QubitName },

    /// The square grid for this many qubits exceeds the coordinate range.
    #[error("Cannot lay out {qubits} qubits on a square grid")]
    GridTooLarge { qubits: usize },
}

impl CompileError {
    /// Check if this error indicates a bug rather than a usage problem.
    pub fn is_internal(&self) -> bool {
        matches!(self, CompileError::InternalConsistencyViolation(_))
    }
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
