//! Circuit instructions combining gates with operands.
//!
//! Instructions are generic over the operand type `Q`. Circuits read from
//! source use [`QubitName`] operands; routed circuits use grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::{CNOT, SWAP, UnaryGate};
use crate::qubit::QubitName;

/// A single-qubit instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnaryOp<Q = QubitName> {
    /// The operator.
    pub gate: UnaryGate,
    /// The qubit operated on.
    pub qubit: Q,
}

/// A two-qubit instruction.
///
/// Routing only looks at the operand pair; the operator name is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryOp<Q = QubitName> {
    /// Operator name, e.g. `CNOT`.
    pub gate: String,
    /// First operand.
    pub control: Q,
    /// Second operand.
    pub target: Q,
}

impl<Q> BinaryOp<Q> {
    /// Create a CNOT.
    pub fn cnot(control: Q, target: Q) -> Self {
        Self {
            gate: CNOT.to_string(),
            control,
            target,
        }
    }

    /// Create a SWAP.
    pub fn swap(a: Q, b: Q) -> Self {
        Self {
            gate: SWAP.to_string(),
            control: a,
            target: b,
        }
    }

    /// Check if this is a SWAP.
    pub fn is_swap(&self) -> bool {
        self.gate == SWAP
    }
}

/// One line of a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction<Q = QubitName> {
    /// Classical bit declaration.
    ///
    /// The name is passed through unchanged; the line itself is re-emitted
    /// from tokens as `cbit <name>`, so spacing is normalized.
    ClassicalBitDecl(String),
    /// Single-qubit operation.
    Unary(UnaryOp<Q>),
    /// Two-qubit operation.
    Binary(BinaryOp<Q>),
}

impl<Q> Instruction<Q> {
    /// Create a classical bit declaration.
    pub fn cbit(name: impl Into<String>) -> Self {
        Instruction::ClassicalBitDecl(name.into())
    }

    /// Create a single-qubit instruction.
    pub fn unary(gate: UnaryGate, qubit: Q) -> Self {
        Instruction::Unary(UnaryOp { gate, qubit })
    }

    /// Create a CNOT instruction.
    pub fn cnot(control: Q, target: Q) -> Self {
        Instruction::Binary(BinaryOp::cnot(control, target))
    }

    /// Create a SWAP instruction.
    pub fn swap(a: Q, b: Q) -> Self {
        Instruction::Binary(BinaryOp::swap(a, b))
    }

    /// Qubits referenced by this instruction, in operand order.
    pub fn qubits(&self) -> impl Iterator<Item = &Q> + '_ {
        let (first, second) = match self {
            Instruction::ClassicalBitDecl(_) => (None, None),
            Instruction::Unary(op) => (Some(&op.qubit), None),
            Instruction::Binary(op) => (Some(&op.control), Some(&op.target)),
        };
        first.into_iter().chain(second)
    }

    /// Check if this is a SWAP.
    pub fn is_swap(&self) -> bool {
        matches!(self, Instruction::Binary(op) if op.is_swap())
    }

    /// Check if this is a two-qubit instruction.
    pub fn is_binary(&self) -> bool {
        matches!(self, Instruction::Binary(_))
    }

    /// Rewrite every operand with a fallible mapping.
    ///
    /// The gate and any angle are carried over unchanged.
    pub fn try_map_qubits<R, E>(
        &self,
        mut f: impl FnMut(&Q) -> Result<R, E>,
    ) -> Result<Instruction<R>, E> {
        Ok(match self {
            Instruction::ClassicalBitDecl(name) => Instruction::ClassicalBitDecl(name.clone()),
            Instruction::Unary(op) => Instruction::Unary(UnaryOp {
                gate: op.gate.clone(),
                qubit: f(&op.qubit)?,
            }),
            Instruction::Binary(op) => Instruction::Binary(BinaryOp {
                gate: op.gate.clone(),
                control: f(&op.control)?,
                target: f(&op.target)?,
            }),
        })
    }
}

impl<Q: fmt::Display> fmt::Display for UnaryOp<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.gate {
            UnaryGate::Rotation { axis, angle } => write!(f, "{axis} {},{angle}", self.qubit),
            UnaryGate::Fixed(name) => write!(f, "{name} {}", self.qubit),
        }
    }
}

impl<Q: fmt::Display> fmt::Display for BinaryOp<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {},{}", self.gate, self.control, self.target)
    }
}

impl<Q: fmt::Display> fmt::Display for Instruction<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::ClassicalBitDecl(name) => write!(f, "cbit {name}"),
            Instruction::Unary(op) => op.fmt(f),
            Instruction::Binary(op) => op.fmt(f),
        }
    }
}
