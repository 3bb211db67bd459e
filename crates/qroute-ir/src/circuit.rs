//! Ordered instruction sequences.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::instruction::Instruction;
use crate::qubit::QubitName;

/// A circuit: instructions in program order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit<Q = QubitName> {
    instructions: Vec<Instruction<Q>>,
}

impl<Q> Circuit<Q> {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self {
            instructions: vec![],
        }
    }

    /// Create an empty circuit with room for `capacity` instructions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
        }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: Instruction<Q>) {
        self.instructions.push(instruction);
    }

    /// The instructions in program order.
    pub fn instructions(&self) -> &[Instruction<Q>] {
        &self.instructions
    }

    /// Iterate over the instructions.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction<Q>> {
        self.instructions.iter()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of SWAP instructions.
    pub fn num_swaps(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_swap()).count()
    }

    /// Number of two-qubit instructions, SWAPs included.
    pub fn num_binary(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_binary()).count()
    }
}

impl<Q: Eq + Hash> Circuit<Q> {
    /// Distinct qubits in order of first appearance.
    ///
    /// A unary instruction contributes its qubit, a binary instruction its
    /// control and then its target.
    pub fn qubits(&self) -> Vec<&Q> {
        let mut seen = FxHashSet::default();
        self.instructions
            .iter()
            .flat_map(|instruction| instruction.qubits())
            .filter(|q| seen.insert(*q))
            .collect()
    }
}

impl<Q> Default for Circuit<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> FromIterator<Instruction<Q>> for Circuit<Q> {
    fn from_iter<I: IntoIterator<Item = Instruction<Q>>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl<Q> Extend<Instruction<Q>> for Circuit<Q> {
    fn extend<I: IntoIterator<Item = Instruction<Q>>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}

impl<Q> IntoIterator for Circuit<Q> {
    type Item = Instruction<Q>;
    type IntoIter = std::vec::IntoIter<Instruction<Q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a, Q> IntoIterator for &'a Circuit<Q> {
    type Item = &'a Instruction<Q>;
    type IntoIter = std::slice::Iter<'a, Instruction<Q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// One instruction per line, each terminated by `\n`.
impl<Q: fmt::Display> fmt::Display for Circuit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}
