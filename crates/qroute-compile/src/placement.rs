//! Logical-to-physical qubit placement.

use rustc_hash::FxHashMap;
use serde::Serialize;

use qroute_ir::QubitName;

use crate::error::PlacementError;
use crate::geometry::Coordinate;

/// A bijection between logical qubits and grid coordinates.
///
/// Both directions are owned here and only change together, so a lookup
/// in one direction always agrees with the other.
#[derive(Debug, Clone, Default)]
pub struct PlacementMap {
    /// Map from logical qubit to grid coordinate.
    qubit_to_coordinate: FxHashMap<QubitName, Coordinate>,
    /// Map from grid coordinate to logical qubit.
    coordinate_to_qubit: FxHashMap<Coordinate, QubitName>,
}

/// One `(qubit, coordinate)` pair of a placement snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QubitPlacement {
    pub qubit: QubitName,
    pub coordinate: Coordinate,
}

impl PlacementMap {
    /// Create a new empty placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a qubit on a free coordinate.
    ///
    /// Fails without modifying the map if the qubit is already placed or
    /// the coordinate is already taken.
    pub fn place(&mut self, qubit: QubitName, coordinate: Coordinate) -> Result<(), PlacementError> {
        if self.qubit_to_coordinate.contains_key(&qubit) {
            return Err(PlacementError::QubitAlreadyPlaced(qubit));
        }
        if let Some(occupant) = self.coordinate_to_qubit.get(&coordinate) {
            return Err(PlacementError::CoordinateOccupied {
                coordinate,
                occupant: occupant.clone(),
            });
        }
        self.coordinate_to_qubit.insert(coordinate, qubit.clone());
        self.qubit_to_coordinate.insert(qubit, coordinate);
        Ok(())
    }

    /// Get the coordinate of a logical qubit.
    pub fn get_coordinate(&self, qubit: &QubitName) -> Result<Coordinate, PlacementError> {
        self.qubit_to_coordinate
            .get(qubit)
            .copied()
            .ok_or_else(|| PlacementError::UnknownQubit(qubit.clone()))
    }

    /// Get the logical qubit on a coordinate.
    pub fn get_qubit_at(&self, coordinate: &Coordinate) -> Result<&QubitName, PlacementError> {
        self.coordinate_to_qubit
            .get(coordinate)
            .ok_or(PlacementError::VacantCoordinate(*coordinate))
    }

    /// Exchange the coordinates of two placed qubits.
    ///
    /// Both qubits are looked up before anything is written; on error the
    /// map is unchanged.
    pub fn swap(&mut self, a: &QubitName, b: &QubitName) -> Result<(), PlacementError> {
        let coordinate_a = self.get_coordinate(a)?;
        let coordinate_b = self.get_coordinate(b)?;
        if coordinate_a == coordinate_b {
            return Ok(());
        }

        self.qubit_to_coordinate.insert(a.clone(), coordinate_b);
        self.qubit_to_coordinate.insert(b.clone(), coordinate_a);
        self.coordinate_to_qubit.insert(coordinate_a, b.clone());
        self.coordinate_to_qubit.insert(coordinate_b, a.clone());
        Ok(())
    }

    /// Get the number of placed qubits.
    pub fn len(&self) -> usize {
        self.qubit_to_coordinate.len()
    }

    /// Check if the placement is empty.
    pub fn is_empty(&self) -> bool {
        self.qubit_to_coordinate.is_empty()
    }

    /// Iterate over (qubit, coordinate) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&QubitName, Coordinate)> + '_ {
        self.qubit_to_coordinate.iter().map(|(q, &c)| (q, c))
    }

    /// Check that the two directions are exact inverses of each other.
    pub fn is_consistent(&self) -> bool {
        self.qubit_to_coordinate.len() == self.coordinate_to_qubit.len()
            && self
                .qubit_to_coordinate
                .iter()
                .all(|(q, c)| self.coordinate_to_qubit.get(c) == Some(q))
    }

    /// Snapshot of the placement in reading order (row by row).
    pub fn sorted_entries(&self) -> Vec<QubitPlacement> {
        let mut entries: Vec<_> = self
            .iter()
            .map(|(qubit, coordinate)| QubitPlacement {
                qubit: qubit.clone(),
                coordinate,
            })
            .collect();
        entries.sort_by_key(|e| (e.coordinate.y, e.coordinate.x));
        entries
    }
}
