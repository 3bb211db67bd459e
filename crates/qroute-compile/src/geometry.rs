//! Grid geometry.
//!
//! Coordinates address cells of a square grid, `(0, 0)` top left:
//!
//! ```text
//! (0,0) (1,0) (2,0)
//! (0,1) (1,1) (2,1)
//! (0,2) (1,2) (2,2)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CompileError, CompileResult};

/// A grid cell, and the physical qubit that sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Check if `other` is exactly one step north, south, east or west.
    ///
    /// A coordinate is not adjacent to itself.
    pub fn adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Physical qubit name, `qubit_<x>_<y>`.
    pub fn to_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "qubit_{}_{}", self.x, self.y)
    }
}

/// A square grid sized to hold a given number of qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimension: u32,
}

impl Grid {
    /// Smallest square grid with at least `num_qubits` cells.
    ///
    /// The side is `ceil(sqrt(num_qubits))`, and 0 for no qubits.
    pub fn for_qubits(num_qubits: usize) -> CompileResult<Self> {
        let root = num_qubits.isqrt();
        let side = if root * root == num_qubits {
            root
        } else {
            root + 1
        };
        let dimension = u32::try_from(side)
            .ok()
            .filter(|d| d.checked_mul(*d).is_some())
            .ok_or(CompileError::GridTooLarge { qubits: num_qubits })?;
        Ok(Self { dimension })
    }

    /// Side length.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Number of cells.
    pub fn num_cells(&self) -> usize {
        self.dimension as usize * self.dimension as usize
    }

    /// Check if a coordinate lies on the grid.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.x < self.dimension && coordinate.y < self.dimension
    }
}
