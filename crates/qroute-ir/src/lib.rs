//! qroute Circuit Representation
//!
//! This crate provides the instruction-level data structures shared by the
//! qroute parser, compiler and CLI.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitName`], an opaque logical qubit identifier
//! - **Gates**: [`UnaryGate`] (rotations and parameter-free operators) and
//!   [`Rotation`]
//! - **Instructions**: [`Instruction`], generic over its operand type so
//!   that logical and physical circuits share one representation
//! - **Circuit**: [`Circuit`], an ordered instruction sequence with qubit
//!   discovery
//!
//! # Example
//!
//! ```rust
//! use qroute_ir::{Circuit, Instruction, QubitName, UnaryGate};
//!
//! let mut circuit: Circuit = Circuit::new();
//! circuit.push(Instruction::unary(UnaryGate::fixed("H"), QubitName::from("a")));
//! circuit.push(Instruction::cnot(QubitName::from("a"), QubitName::from("b")));
//!
//! assert_eq!(circuit.qubits().len(), 2);
//! assert_eq!(circuit.to_string(), "H a\nCNOT a,b\n");
//! ```

pub mod circuit;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use gate::{CNOT, Rotation, SWAP, UnaryGate};
pub use instruction::{BinaryOp, Instruction, UnaryOp};
pub use qubit::QubitName;
