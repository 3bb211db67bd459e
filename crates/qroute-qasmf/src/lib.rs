//! qasmf Parser and Emitter for qroute
//!
//! This crate reads and writes the flat, line-oriented instruction format
//! ("qasmf") that qroute routes. Each line holds exactly one instruction.
//!
//! # Grammar
//!
//! | Form | Meaning |
//! |------|---------|
//! | `cbit <name>` | Classical bit declaration |
//! | `<Op> <qubit>` | Parameter-free single-qubit gate |
//! | `Rx\|Ry\|Rz <qubit>,<angle>` | Rotation; the angle is kept verbatim |
//! | `CNOT <control>,<target>` | The only two-qubit gate accepted on input |
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use qroute_qasmf::{emit, parse};
//!
//! let source = "cbit c0\nH a\nRz b,0.25\nCNOT a,b\n";
//! let circuit = parse(source).unwrap();
//!
//! assert_eq!(circuit.len(), 4);
//! assert_eq!(emit(&circuit), source);
//! ```

pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;

pub use emitter::{emit, emit_to};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_line};
